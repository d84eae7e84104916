//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use ftdm_app::actions::ActionContext;
use ftdm_app::process::{process_message, shutdown};
use ftdm_app::signals::spawn_signal_handler;
use ftdm_app::{AppState, Message, Settings, UrlOpener};
use ftdm_core::prelude::*;
use ftdm_core::{Page, ThemeProvider};
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Where the browser starts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub page: Page,
    /// Record id to expand on the start page
    pub expand: Option<String>,
}

/// Run the docs browser until the user quits
pub async fn run(
    settings: Settings,
    theme: Box<dyn ThemeProvider>,
    opener: Arc<dyn UrlOpener>,
    options: RunOptions,
) -> Result<()> {
    let mut state = AppState::with_settings(settings, theme);
    if !state.start_at(options.page, options.expand.as_deref()) {
        warn!(
            "No record {:?} on page {}",
            options.expand.as_deref().unwrap_or_default(),
            options.page
        );
    }
    info!("Starting on {} ({} theme)", state.page(), state.theme());

    // Background tasks report back through this channel
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    let signals = spawn_signal_handler(msg_tx.clone());
    let ctx = ActionContext::new(msg_tx, opener);

    let mut term = terminal::init();
    let result = run_loop(&mut term, &mut state, msg_rx, &ctx);

    shutdown(&mut state);
    signals.abort();
    terminal::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    ctx: &ActionContext,
) -> Result<()> {
    while !state.should_quit() {
        // Download results, opener failures, signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, ctx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, ctx);
        }
    }

    Ok(())
}
