//! Light/dark theme for the site
//!
//! [`LocalStorageTheme`] is the browser's [`ThemeProvider`]. [`provide_theme`]
//! wraps it in a [`ThemeContext`] at the app root, so components read and flip
//! the theme through context instead of touching storage themselves.

use ftdm_core::{ThemeMode, ThemePreference, ThemeProvider};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// `localStorage` key holding `"light"` or `"dark"`
pub const STORAGE_KEY: &str = "theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme persisted to `localStorage`
///
/// Holds only the mode; storage is looked up on each write, which keeps the
/// provider `Send` like the others.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTheme(ThemeMode);

impl LocalStorageTheme {
    /// Stored choice, or the browser's colour scheme when nothing is stored
    pub fn load() -> Self {
        let stored = storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| v.parse::<ThemeMode>().ok());

        match stored {
            Some(mode) => Self(mode),
            None => Self(ThemePreference::System.resolve(system_mode())),
        }
    }

    fn persist(&self) -> Result<(), JsValue> {
        let storage = storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        storage.set_item(STORAGE_KEY, self.0.as_str())
    }
}

impl ThemeProvider for LocalStorageTheme {
    fn theme(&self) -> ThemeMode {
        self.0
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.0 = mode;
        if let Err(e) = self.persist() {
            log::warn!("could not save theme: {e:?}");
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn system_mode() -> ThemeMode {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(true);
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Put the `dark` class on `<html>` for dark mode, remove it otherwise
fn apply_class(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = match mode {
        ThemeMode::Dark => classes.add_1("dark"),
        ThemeMode::Light => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        log::warn!("could not apply theme class: {e:?}");
    }
}

/// Shared handle to the active theme
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode() == ThemeMode::Dark
    }

    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggled());
    }
}

/// Create the theme context and keep storage and `<html>` in step with it
///
/// Call once, at the root of the app.
pub fn provide_theme() -> ThemeContext {
    let mut provider = LocalStorageTheme::load();
    let ctx = ThemeContext {
        mode: RwSignal::new(provider.theme()),
    };
    apply_class(provider.theme());

    Effect::new(move |_| {
        let mode = ctx.mode.get();
        if mode != provider.theme() {
            provider.set_theme(mode);
            log::info!("theme switched to {mode}");
        }
        apply_class(mode);
    });

    provide_context(ctx);
    ctx
}

/// Theme context from the nearest [`provide_theme`]
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
