//! Light/dark theme capability
//!
//! Front-ends receive a [`ThemeProvider`] from whoever assembles the app and
//! never reach for a global. The terminal edition backs it with a file, the
//! website with `localStorage`; [`StaticTheme`] keeps it in memory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Concrete colour scheme in use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::config(format!("unknown theme '{other}'"))),
        }
    }
}

/// Configured preference, resolved to a [`ThemeMode`] at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve against the detected system mode
    pub fn resolve(self, system: ThemeMode) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => system,
        }
    }
}

/// Read/write access to the active theme
pub trait ThemeProvider: Send {
    fn theme(&self) -> ThemeMode;

    fn set_theme(&mut self, mode: ThemeMode);

    /// Flip light/dark and return the new mode
    fn toggle(&mut self) -> ThemeMode {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}

/// In-memory provider with no persistence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticTheme(ThemeMode);

impl StaticTheme {
    pub fn new(mode: ThemeMode) -> Self {
        Self(mode)
    }
}

impl ThemeProvider for StaticTheme {
    fn theme(&self) -> ThemeMode {
        self.0
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        self.0 = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut theme = StaticTheme::new(ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(theme.theme(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_preference_resolution() {
        assert_eq!(
            ThemePreference::System.resolve(ThemeMode::Light),
            ThemeMode::Light
        );
        assert_eq!(
            ThemePreference::Dark.resolve(ThemeMode::Light),
            ThemeMode::Dark
        );
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Light).unwrap(),
            "\"light\""
        );
    }
}
