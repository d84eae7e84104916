//! Configuration types

use serde::{Deserialize, Serialize};

use ftdm_core::{ModalPolicy, SectionOptions, ThemePreference};

pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/Rohith-Rathan/ftdm-framework-download";
pub const DEFAULT_ARCHIVE_URL: &str =
    "https://github.com/Rohith-Rathan/ftdm-framework-download/archive/main.zip";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub download: DownloadSettings,
}

/// Icon rendering mode
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font) or safe
/// Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show duration badges in stage headers
    #[serde(default = "default_true")]
    pub show_durations: bool,

    /// Show long descriptions at the top of expanded panels
    #[serde(default = "default_true")]
    pub show_detailed_descriptions: bool,

    /// Show the page sidebar on startup
    #[serde(default = "default_true")]
    pub show_sidebar: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_durations: true,
            show_detailed_descriptions: true,
            show_sidebar: true,
        }
    }
}

impl UiSettings {
    pub fn section_options(&self) -> SectionOptions {
        SectionOptions {
            show_durations: self.show_durations,
            show_detailed_descriptions: self.show_detailed_descriptions,
        }
    }
}

/// Theme settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// "light", "dark" or "system" (default)
    #[serde(default)]
    pub preference: ThemePreference,
}

/// Framework download settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DownloadSettings {
    /// Repository page opened by "View on GitHub"
    #[serde(default = "default_repository_url")]
    pub repository_url: String,

    /// Archive handed to the opener when the download finishes
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Delay before the archive is opened
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Program used to open links (empty = system default)
    #[serde(default)]
    pub opener: String,

    /// Ask for an access code before downloading
    #[serde(default)]
    pub require_auth: bool,

    /// Code accepted when `require_auth` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,

    /// Close the dialog after a successful download
    #[serde(default)]
    pub auto_close_on_success: bool,

    /// Pause between a successful download and the auto-close
    #[serde(default = "default_auto_close_delay_ms")]
    pub auto_close_delay_ms: u64,

    /// Show failure messages inside the dialog
    #[serde(default = "default_true")]
    pub show_errors: bool,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            repository_url: default_repository_url(),
            archive_url: default_archive_url(),
            simulated_delay_ms: default_simulated_delay_ms(),
            opener: String::new(),
            require_auth: false,
            access_code: None,
            auto_close_on_success: false,
            auto_close_delay_ms: default_auto_close_delay_ms(),
            show_errors: true,
        }
    }
}

impl DownloadSettings {
    pub fn policy(&self) -> ModalPolicy {
        ModalPolicy {
            require_auth: self.require_auth,
            access_code: self.access_code.clone().filter(|c| !c.is_empty()),
            auto_close_on_success: self.auto_close_on_success,
            show_errors: self.show_errors,
        }
    }

    /// `git clone` line shown in the dialog
    pub fn clone_command(&self) -> String {
        format!(
            "git clone {}.git",
            self.repository_url.trim_end_matches('/')
        )
    }
}

fn default_true() -> bool {
    true
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

fn default_archive_url() -> String {
    DEFAULT_ARCHIVE_URL.to_string()
}

fn default_simulated_delay_ms() -> u64 {
    2000
}

fn default_auto_close_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults_match_active_dialog() {
        let policy = DownloadSettings::default().policy();
        assert!(!policy.require_auth);
        assert!(!policy.auto_close_on_success);
        assert!(policy.show_errors);
    }

    #[test]
    fn test_empty_access_code_is_treated_as_unset() {
        let settings = DownloadSettings {
            require_auth: true,
            access_code: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(settings.policy().access_code, None);
    }

    #[test]
    fn test_clone_command() {
        let settings = DownloadSettings {
            repository_url: "https://example.com/org/repo/".into(),
            ..Default::default()
        };
        assert_eq!(
            settings.clone_command(),
            "git clone https://example.com/org/repo.git"
        );
    }

    #[test]
    fn test_section_options_follow_ui_settings() {
        let ui = UiSettings {
            show_durations: false,
            ..Default::default()
        };
        let options = ui.section_options();
        assert!(!options.show_durations);
        assert!(options.show_detailed_descriptions);
    }
}
