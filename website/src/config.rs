//! Build-time site settings
//!
//! The site has no config file. The access code comes from the
//! `FTDM_ACCESS_CODE` environment variable at build time; without it the
//! download is not gated.

use std::time::Duration;

use ftdm_core::ModalPolicy;

pub const REPOSITORY_URL: &str = "https://github.com/Rohith-Rathan/ftdm-framework-download";

pub const ARCHIVE_URL: &str =
    "https://github.com/Rohith-Rathan/ftdm-framework-download/archive/main.zip";

/// Pause before the archive link is opened
pub const SIMULATED_DELAY: Duration = Duration::from_millis(2000);

/// Pause between a successful download and the dialog closing itself
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(1000);

pub fn clone_command() -> String {
    format!("git clone {REPOSITORY_URL}.git")
}

pub fn download_policy() -> ModalPolicy {
    let access_code = option_env!("FTDM_ACCESS_CODE")
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    ModalPolicy {
        require_auth: access_code.is_some(),
        access_code,
        ..ModalPolicy::default()
    }
}
