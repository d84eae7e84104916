//! File-backed [`ThemeProvider`] for the terminal edition
//!
//! The chosen mode is kept in `<config_dir>/ftdm-docs/theme.toml`. When no
//! mode has been saved yet, the configured [`ThemePreference`] decides, with
//! `system` resolved from the terminal's `COLORFGBG`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::config_dir;
use ftdm_core::prelude::*;
use ftdm_core::{ThemeMode, ThemePreference, ThemeProvider};

const THEME_FILENAME: &str = "theme.toml";

#[derive(Debug, Serialize, Deserialize)]
struct StoredTheme {
    mode: ThemeMode,
}

/// Theme provider that persists every change to disk
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: Option<PathBuf>,
    mode: ThemeMode,
}

impl FileThemeStore {
    /// `<config_dir>/ftdm-docs/theme.toml`
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(THEME_FILENAME))
    }

    /// Load the saved mode, falling back to `preference`
    ///
    /// With `path == None` nothing is read or written.
    pub fn load(path: Option<PathBuf>, preference: ThemePreference) -> Self {
        let saved = path.as_deref().and_then(read_saved);
        let mode = saved.unwrap_or_else(|| preference.resolve(detect_system_theme()));
        debug!("Theme resolved to {} (saved: {:?})", mode, saved);
        Self { path, mode }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create {:?}", parent))?;
        }
        let content = toml::to_string(&StoredTheme { mode: self.mode })
            .map_err(|e| Error::config(format!("Failed to serialize theme: {}", e)))?;
        std::fs::write(path, content).context(format!("Failed to persist theme to {:?}", path))
    }
}

impl ThemeProvider for FileThemeStore {
    fn theme(&self) -> ThemeMode {
        self.mode
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if self.save().is_err() {
            debug!("Theme {:?} kept in memory only", mode);
        }
    }
}

fn read_saved(path: &Path) -> Option<ThemeMode> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<StoredTheme>(&content) {
        Ok(stored) => Some(stored.mode),
        Err(e) => {
            warn!("Ignoring unreadable theme file {:?}: {}", path, e);
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// System Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Terminal background from `COLORFGBG`, dark when unknown
pub fn detect_system_theme() -> ThemeMode {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| mode_from_colorfgbg(&value))
        .unwrap_or_default()
}

/// Parse `COLORFGBG` ("fg;bg" or "fg;other;bg"). The last field is the
/// background palette index: 0-6 and 8 are dark colours.
pub fn mode_from_colorfgbg(value: &str) -> Option<ThemeMode> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => ThemeMode::Dark,
        _ => ThemeMode::Light,
    })
}
