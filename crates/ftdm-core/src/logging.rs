//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "ftdm.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/ftdm-docs/logs/` because the terminal
/// itself is owned by the TUI. Log level is controlled by the `FTDM_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// FTDM_LOG=debug ftdm
/// FTDM_LOG=ftdm_app=trace ftdm --page safeguards
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via FTDM_LOG
    let env_filter = EnvFilter::try_from_env("FTDM_LOG").unwrap_or_else(|_| {
        EnvFilter::new("ftdm_docs=info,ftdm_app=info,ftdm_tui=info,ftdm_core=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("FTDM docs starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("ftdm-docs").join("logs")
}

/// Path of the active log file
pub fn current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = current_log_file();
        assert!(path.ends_with("ftdm-docs/logs/ftdm.log"));
    }
}
