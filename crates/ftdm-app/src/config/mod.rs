//! Configuration file parsing for the FTDM docs browser
//!
//! Supports:
//! - `<config_dir>/ftdm-docs/config.toml` - Global settings
//! - `--config <PATH>` - Explicit settings file

pub mod settings;
pub mod types;

pub use settings::{config_dir, default_config_path, init_config, load_settings, parse_settings};
pub use types::*;
