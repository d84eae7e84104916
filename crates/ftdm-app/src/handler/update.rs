//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::info;

use super::{download, keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            match state.download.busy_ticket() {
                Some(ticket) => UpdateResult::action(UpdateAction::CancelDownload { ticket }),
                None => UpdateResult::none(),
            }
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextPage => {
            let page = state.page().next();
            navigation::handle_go_to_page(state, page)
        }
        Message::PreviousPage => {
            let page = state.page().previous();
            navigation::handle_go_to_page(state, page)
        }
        Message::GoToPage(page) => navigation::handle_go_to_page(state, page),

        // ─────────────────────────────────────────────────────────
        // Accordion Cursor
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.view.cursor_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.view.cursor_down();
            UpdateResult::none()
        }
        Message::CursorFirst => {
            state.view.cursor_first();
            UpdateResult::none()
        }
        Message::CursorLast => {
            state.view.cursor_last();
            UpdateResult::none()
        }
        Message::ToggleSelected => navigation::handle_toggle_selected(state),
        Message::CollapseAll => {
            state.view.collapse_all();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chrome
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => {
            state.sidebar_visible = !state.sidebar_visible;
            UpdateResult::none()
        }
        Message::ToggleTheme => {
            let mode = state.toggle_theme();
            info!("Theme switched to {}", mode);
            state.status_message = Some(format!("Theme: {mode}"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Download Dialog
        // ─────────────────────────────────────────────────────────
        Message::OpenDownload => download::handle_open(state),
        Message::CloseDownload => download::handle_close(state),
        Message::StartDownload => download::handle_start(state),
        Message::DownloadFinished { ticket, result } => {
            download::handle_finished(state, ticket, result)
        }
        Message::OpenRepository => download::handle_open_repository(state),
        Message::UrlOpenFailed { url, reason } => {
            download::handle_url_open_failed(state, url, reason)
        }

        Message::CodeInput(c) => {
            state.download.push_code_char(c);
            UpdateResult::none()
        }
        Message::CodeBackspace => {
            state.download.pop_code_char();
            UpdateResult::none()
        }
        Message::ToggleCodeReveal => {
            state.download.toggle_reveal();
            UpdateResult::none()
        }
        Message::SubmitCode => download::handle_submit_code(state),

        Message::TreeUp => {
            state.file_tree.select_previous();
            UpdateResult::none()
        }
        Message::TreeDown => {
            state.file_tree.select_next();
            UpdateResult::none()
        }
        Message::TreeToggle => {
            state.file_tree.toggle_selected();
            UpdateResult::none()
        }
    }
}
