//! Centralized theme system for the docs TUI.
//!
//! This module provides:
//! - `palette` - Light and dark color sets, chosen by [`ThemeMode`]
//! - `styles` - Semantic style builders over a palette
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

use ftdm_core::ThemeMode;

pub use icons::IconSet;
pub use palette::Palette;

/// Palette for the active theme
pub fn palette_for(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &palette::DARK,
        ThemeMode::Light => &palette::LIGHT,
    }
}
