//! ftdm - Terminal documentation browser for the FTDM/EFTDM framework
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use tracing::{info, warn};

use ftdm_app::config::{default_config_path, init_config, load_settings, Settings};
use ftdm_app::{FileThemeStore, SystemOpener};
use ftdm_core::{Error, Page};
use ftdm_tui::RunOptions;

/// Browse the FTDM/EFTDM framework docs in the terminal
#[derive(Parser, Debug)]
#[command(name = "ftdm", version)]
#[command(about = "Terminal documentation browser for the FTDM/EFTDM framework", long_about = None)]
struct Args {
    /// Page to open (introduction, quick-start, stage-overview, scenarios, safeguards, benefits)
    #[arg(long, short, default_value = "introduction")]
    page: Page,

    /// Record id to expand on the start page, e.g. "3" or "6.10"
    #[arg(long, short)]
    expand: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the page as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = ftdm_core::logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => default_config_path(),
    };

    if args.init_config {
        let path = config_path.ok_or_else(|| eyre!("No config directory on this platform"))?;
        if init_config(&path)? {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    // An explicit path must exist; the default one may not
    if let Some(path) = args.config.as_ref().filter(|path| !path.exists()) {
        return Err(Error::ConfigNotFound { path: path.clone() }.into());
    }
    let settings: Settings = config_path
        .as_deref()
        .map(load_settings)
        .unwrap_or_default();

    let theme = FileThemeStore::load(FileThemeStore::default_path(), settings.theme.preference);

    if args.headless {
        let mut state = ftdm_app::AppState::with_settings(settings, Box::new(theme));
        if !state.start_at(args.page, args.expand.as_deref()) {
            warn!("No record {:?} on page {}", args.expand, args.page);
        }
        let mut stdout = std::io::stdout().lock();
        ftdm_docs::write_report(&state, &mut stdout)?;
        return Ok(());
    }

    let opener = Arc::new(SystemOpener::new(settings.download.opener.clone()));
    let options = RunOptions {
        page: args.page,
        expand: args.expand,
    };

    ftdm_tui::run(settings, Box::new(theme), opener, options).await?;
    info!("Goodbye");
    Ok(())
}
