//! Tests for the update function and key handling

use std::time::Duration;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};
use ftdm_core::{AuthGate, Page, RecordId, StaticTheme, ThemeMode};

fn gated_state() -> AppState {
    let mut settings = Settings::default();
    settings.download.require_auth = true;
    settings.download.access_code = Some("eftdm".to_string());
    AppState::with_settings(settings, Box::new(StaticTheme::new(ThemeMode::Dark)))
}

/// Feed a key and follow the resulting message, returning the final action
fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    let mut msg = Some(Message::Key(key));
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        if result.action.is_some() {
            action = result.action;
        }
        msg = result.message;
    }
    action
}

fn start_ticket(action: Option<UpdateAction>) -> ftdm_core::ActionTicket {
    match action {
        Some(UpdateAction::StartDownload { ticket, .. }) => ticket,
        other => panic!("expected StartDownload, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Key Mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_normal_mode_keys() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::NextPage));
    assert_eq!(handle_key(&state, InputKey::BackTab), Some(Message::PreviousPage));
    assert_eq!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::GoToPage(Page::StageOverview))
    );
    assert_eq!(handle_key(&state, InputKey::Char('9')), None);
    assert_eq!(handle_key(&state, InputKey::Char('0')), None);
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::ToggleSelected));
    assert_eq!(handle_key(&state, InputKey::Char('d')), Some(Message::OpenDownload));
}

#[test]
fn test_dialog_keys_depend_on_gate() {
    let mut state = gated_state();
    update(&mut state, Message::OpenDownload);

    // Locked: letters are typed, not interpreted
    assert_eq!(
        handle_key(&state, InputKey::Char('d')),
        Some(Message::CodeInput('d'))
    );
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::SubmitCode));

    let mut open = AppState::new();
    update(&mut open, Message::OpenDownload);
    assert_eq!(
        handle_key(&open, InputKey::Char('d')),
        Some(Message::StartDownload)
    );
    assert_eq!(
        handle_key(&open, InputKey::Char('o')),
        Some(Message::OpenRepository)
    );
    assert_eq!(handle_key(&open, InputKey::Esc), Some(Message::CloseDownload));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_page_navigation_wraps() {
    let mut state = AppState::new();
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.page(), Page::Benefits);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.page(), Page::Introduction);
}

#[test]
fn test_accordion_click_scenario() {
    let mut state = AppState::new();
    update(&mut state, Message::GoToPage(Page::StageOverview));

    press(&mut state, InputKey::Enter);
    let acc = *state.view.accordion(0).unwrap();
    assert_eq!(acc.expanded(), Some(RecordId("1")));

    press(&mut state, InputKey::Enter);
    assert_eq!(state.view.accordion(0).unwrap().expanded(), None);

    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(
        state.view.accordion(0).unwrap().expanded(),
        Some(RecordId("2"))
    );
}

#[test]
fn test_collapse_all() {
    let mut state = AppState::new();
    update(&mut state, Message::GoToPage(Page::Safeguards));
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::End);
    press(&mut state, InputKey::Enter);

    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.view.accordion(0).unwrap().expanded(), None);
    assert_eq!(state.view.accordion(1).unwrap().expanded(), None);
}

#[test]
fn test_theme_and_sidebar_toggles() {
    let mut state = AppState::new();
    let sidebar = state.sidebar_visible;

    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.theme(), ThemeMode::Light);
    press(&mut state, InputKey::Char('b'));
    assert_eq!(state.sidebar_visible, !sidebar);
}

// ─────────────────────────────────────────────────────────
// Download Dialog
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_then_close_leaves_idle() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    assert!(state.download.is_open());
    assert!(!state.download.is_busy());

    let result = update(&mut state, Message::CloseDownload);
    assert!(result.action.is_none());
    assert!(!state.download.is_open());
    assert!(!state.download.is_busy());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_start_uses_configured_download() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);

    match update(&mut state, Message::StartDownload).action {
        Some(UpdateAction::StartDownload {
            archive_url,
            delay,
            auto_close_delay,
            ..
        }) => {
            assert_eq!(archive_url, state.settings.download.archive_url);
            assert_eq!(delay, Duration::from_millis(2000));
            assert_eq!(auto_close_delay, None);
        }
        other => panic!("expected StartDownload, got {other:?}"),
    }
    assert!(state.download.is_busy());
}

#[test]
fn test_start_while_busy_is_noop() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let ticket = start_ticket(update(&mut state, Message::StartDownload).action);

    let again = update(&mut state, Message::StartDownload);
    assert!(again.action.is_none());
    assert_eq!(state.download.busy_ticket(), Some(ticket));
}

#[test]
fn test_success_keeps_dialog_open() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let ticket = start_ticket(update(&mut state, Message::StartDownload).action);

    update(
        &mut state,
        Message::DownloadFinished {
            ticket,
            result: Ok(()),
        },
    );
    assert!(state.download.is_open());
    assert!(!state.download.is_busy());
    assert_eq!(state.ui_mode, UiMode::DownloadDialog);
}

#[test]
fn test_failure_keeps_dialog_open_and_shows_error() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let ticket = start_ticket(update(&mut state, Message::StartDownload).action);

    update(
        &mut state,
        Message::DownloadFinished {
            ticket,
            result: Err("Download failed. no opener".to_string()),
        },
    );
    assert!(state.download.is_open());
    assert!(!state.download.is_busy());
    assert_eq!(state.download.error(), Some("Download failed. no opener"));

    // Retry is allowed
    assert!(update(&mut state, Message::StartDownload).action.is_some());
}

#[test]
fn test_auto_close_policy_closes_on_success() {
    let mut settings = Settings::default();
    settings.download.auto_close_on_success = true;
    let mut state = AppState::with_settings(settings, Box::new(StaticTheme::default()));

    update(&mut state, Message::OpenDownload);
    let action = update(&mut state, Message::StartDownload).action;
    let ticket = match action {
        Some(UpdateAction::StartDownload {
            ticket,
            auto_close_delay,
            ..
        }) => {
            assert_eq!(auto_close_delay, Some(Duration::from_millis(1000)));
            ticket
        }
        other => panic!("expected StartDownload, got {other:?}"),
    };

    update(
        &mut state,
        Message::DownloadFinished {
            ticket,
            result: Ok(()),
        },
    );
    assert!(!state.download.is_open());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_close_while_busy_requests_cancel() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let ticket = start_ticket(update(&mut state, Message::StartDownload).action);

    let result = update(&mut state, Message::CloseDownload);
    assert_eq!(
        result.action,
        Some(UpdateAction::CancelDownload { ticket })
    );
    assert!(!state.download.is_busy());
}

#[test]
fn test_stale_completion_after_reopen_is_ignored() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let stale = start_ticket(update(&mut state, Message::StartDownload).action);
    update(&mut state, Message::CloseDownload);

    update(&mut state, Message::OpenDownload);
    let current = start_ticket(update(&mut state, Message::StartDownload).action);

    update(
        &mut state,
        Message::DownloadFinished {
            ticket: stale,
            result: Ok(()),
        },
    );
    assert_eq!(state.download.busy_ticket(), Some(current));
}

#[test]
fn test_open_repository_never_goes_busy() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let action = press(&mut state, InputKey::Char('o'));

    assert_eq!(
        action,
        Some(UpdateAction::OpenUrl {
            url: state.settings.download.repository_url.clone()
        })
    );
    assert!(!state.download.is_busy());
}

#[test]
fn test_access_code_flow() {
    let mut state = gated_state();
    press(&mut state, InputKey::Char('d'));
    assert!(state.download.is_locked());

    // Locked dialog cannot start
    assert!(update(&mut state, Message::StartDownload).action.is_none());

    for c in "nope".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);
    match state.download.gate() {
        AuthGate::Locked { input, error, .. } => {
            assert!(input.is_empty());
            assert!(error.is_some());
        }
        AuthGate::Open => panic!("wrong code must not unlock"),
    }

    for c in "eftdx".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Backspace);
    press(&mut state, InputKey::Char('m'));
    press(&mut state, InputKey::Enter);
    assert!(!state.download.is_locked());

    assert!(press(&mut state, InputKey::Enter).is_some());
}

#[test]
fn test_reopen_relocks_gate() {
    let mut state = gated_state();
    update(&mut state, Message::OpenDownload);
    for c in "eftdm".chars() {
        update(&mut state, Message::CodeInput(c));
    }
    update(&mut state, Message::SubmitCode);
    assert!(!state.download.is_locked());

    update(&mut state, Message::CloseDownload);
    update(&mut state, Message::OpenDownload);
    assert!(state.download.is_locked());
}

#[test]
fn test_file_tree_navigation_in_dialog() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let rows_before = state.file_tree.visible_rows().len();

    // Root folder collapses
    press(&mut state, InputKey::Char(' '));
    assert_eq!(state.file_tree.visible_rows().len(), 1);
    press(&mut state, InputKey::Char(' '));
    assert!(state.file_tree.visible_rows().len() > 1);

    press(&mut state, InputKey::Down);
    assert_eq!(state.file_tree.selected_index(), 1);

    // Reopening restores the initial view
    update(&mut state, Message::CloseDownload);
    update(&mut state, Message::OpenDownload);
    assert_eq!(state.file_tree.selected_index(), 0);
    assert_eq!(state.file_tree.visible_rows().len(), rows_before);
}

#[test]
fn test_quit_without_download() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Quit);
    assert!(result.action.is_none());
    assert_eq!(state.phase, AppPhase::Quitting);
}
