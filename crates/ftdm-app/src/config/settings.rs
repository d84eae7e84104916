//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use ftdm_core::prelude::*;

const APP_DIR: &str = "ftdm-docs";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# FTDM Docs Configuration

[ui]
icons = "unicode"                 # "unicode" or "nerd_fonts"
show_durations = true             # Duration badges in stage headers
show_detailed_descriptions = true # Long descriptions in expanded panels
show_sidebar = true

[theme]
preference = "system"             # "light", "dark" or "system" (reads COLORFGBG)

[download]
repository_url = "https://github.com/Rohith-Rathan/ftdm-framework-download"
archive_url = "https://github.com/Rohith-Rathan/ftdm-framework-download/archive/main.zip"
simulated_delay_ms = 2000
opener = ""                       # Empty = system default (xdg-open / open / start)
require_auth = false
# access_code = ""                # Required when require_auth = true
auto_close_on_success = false
auto_close_delay_ms = 1000
show_errors = true
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Locations
// ─────────────────────────────────────────────────────────────────────────────

/// `<config_dir>/ftdm-docs`, if the platform has a config directory
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// `<config_dir>/ftdm-docs/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::ConfigInvalid {
        message: e.to_string(),
    })
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `config_path`
///
/// Returns `false` without touching anything when the file already exists.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
