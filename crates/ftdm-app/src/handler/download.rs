//! Download dialog handlers
//!
//! The dialog's state machine lives in [`ftdm_core::DownloadModal`]. These
//! handlers translate its transitions into background work: starting an
//! action spawns a task, closing the dialog cancels it.

use std::time::Duration;

use crate::state::{AppState, UiMode};
use ftdm_core::{ActionOutcome, ActionTicket, Completion};
use tracing::{debug, info, warn};

use super::{UpdateAction, UpdateResult};

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.ui_mode == UiMode::DownloadDialog {
        return UpdateResult::none();
    }
    state.download.open();
    state.file_tree.reset();
    state.ui_mode = UiMode::DownloadDialog;
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    let in_flight = state.download.close();
    state.ui_mode = UiMode::Normal;

    match in_flight {
        Some(ticket) => {
            info!("Download {} cancelled by closing the dialog", ticket);
            UpdateResult::action(UpdateAction::CancelDownload { ticket })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_start(state: &mut AppState) -> UpdateResult {
    let Some(ticket) = state.download.start_action() else {
        debug!(
            "Download not started (open: {}, busy: {}, locked: {})",
            state.download.is_open(),
            state.download.is_busy(),
            state.download.is_locked()
        );
        return UpdateResult::none();
    };

    let settings = &state.settings.download;
    info!("Starting download {} of {}", ticket, settings.archive_url);

    let auto_close_delay = settings
        .auto_close_on_success
        .then(|| Duration::from_millis(settings.auto_close_delay_ms));

    UpdateResult::action(UpdateAction::StartDownload {
        ticket,
        archive_url: settings.archive_url.clone(),
        delay: Duration::from_millis(settings.simulated_delay_ms),
        auto_close_delay,
    })
}

pub fn handle_finished(
    state: &mut AppState,
    ticket: ActionTicket,
    result: ActionOutcome,
) -> UpdateResult {
    if state
        .download_task
        .as_ref()
        .is_some_and(|task| task.ticket() == ticket)
    {
        state.download_task = None;
    }

    if let Err(reason) = &result {
        warn!("Download {} failed: {}", ticket, reason);
    }

    match state.download.complete(ticket, result) {
        Completion::Ignored => {
            debug!("Ignoring stale completion for download {}", ticket);
        }
        Completion::Idle => {
            state.status_message = Some("Framework archive opened in your browser".to_string());
        }
        Completion::Closed => {
            state.ui_mode = UiMode::Normal;
            state.status_message = Some("Framework archive opened in your browser".to_string());
        }
        Completion::Failed => {
            state.status_message = Some("Download failed. Please try again.".to_string());
        }
    }

    UpdateResult::none()
}

pub fn handle_open_repository(state: &mut AppState) -> UpdateResult {
    let url = state.settings.download.repository_url.clone();
    state.status_message = Some(format!("Opening {url}"));
    UpdateResult::action(UpdateAction::OpenUrl { url })
}

pub fn handle_url_open_failed(state: &mut AppState, url: String, reason: String) -> UpdateResult {
    warn!("Failed to open {}: {}", url, reason);
    state.status_message = Some(format!("Could not open {url}: {reason}"));
    UpdateResult::none()
}

pub fn handle_submit_code(state: &mut AppState) -> UpdateResult {
    if state.download.submit_code() {
        debug!("Access code accepted");
    }
    UpdateResult::none()
}
