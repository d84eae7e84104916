//! Handing links to the system browser
//!
//! [`UrlOpener`] is the seam between the download flow and the outside
//! world. [`SystemOpener`] launches the platform opener (`xdg-open`, `open`,
//! `cmd /C start`) or a configured program, fire-and-forget.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use url::Url;

use ftdm_core::prelude::*;

/// Something that can show a URL to the user
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Parse `raw` and reject anything that is not http(s)
pub fn validate_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_url(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Program and leading arguments of a platform opener
type Launcher = (&'static str, &'static [&'static str]);

const NO_ARGS: &[&str] = &[];

#[cfg(target_os = "macos")]
const PLATFORM_LAUNCHERS: &[Launcher] = &[("open", &[])];

#[cfg(target_os = "windows")]
const PLATFORM_LAUNCHERS: &[Launcher] = &[("cmd", &["/C", "start", ""])];

#[cfg(all(unix, not(target_os = "macos")))]
const PLATFORM_LAUNCHERS: &[Launcher] = &[
    ("xdg-open", &[]),
    ("gio", &["open"]),
    ("sensible-browser", &[]),
];

#[cfg(not(any(unix, target_os = "windows")))]
const PLATFORM_LAUNCHERS: &[Launcher] = &[];

/// Opens URLs with the platform default (or a configured) program
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    /// Custom program from `[download] opener`; empty means platform default
    program: String,
}

impl SystemOpener {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into().trim().to_string(),
        }
    }

    /// Resolve the program to run and the arguments that precede the URL
    fn resolve(&self) -> Result<(PathBuf, &'static [&'static str])> {
        if !self.program.is_empty() {
            return which::which(&self.program)
                .map(|path| (path, NO_ARGS))
                .map_err(|_| Error::NoOpener {
                    tried: self.program.clone(),
                });
        }

        PLATFORM_LAUNCHERS
            .iter()
            .find_map(|(program, args)| which::which(program).ok().map(|path| (path, *args)))
            .ok_or_else(|| Error::NoOpener {
                tried: PLATFORM_LAUNCHERS
                    .iter()
                    .map(|(program, _)| *program)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let url = validate_url(url)?;
        let (program, args) = self.resolve()?;

        debug!("Opening {} with {:?}", url, program);
        Command::new(&program)
            .args(args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::opener(url.as_str(), e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_https() {
        let url = validate_url("https://github.com/Rohith-Rathan/ftdm-framework-download").unwrap();
        assert_eq!(url.host_str(), Some("github.com"));
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        assert!(matches!(
            validate_url("not a url"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_invalid_url_is_rejected_before_launch() {
        let opener = SystemOpener::new("definitely-not-a-real-opener-ftdm");
        assert!(matches!(
            opener.open("ftp://example.com"),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_missing_custom_program_reports_no_opener() {
        let opener = SystemOpener::new("definitely-not-a-real-opener-ftdm");
        match opener.open("https://example.com") {
            Err(Error::NoOpener { tried }) => {
                assert_eq!(tried, "definitely-not-a-real-opener-ftdm")
            }
            other => panic!("expected NoOpener, got {other:?}"),
        }
    }
}
