//! Full-screen rendering tests for the view function

use super::*;
use crate::test_utils::TestTerminal;
use crate::theme::palette::{DARK, LIGHT};
use crate::widgets::{BUSY_TEXT, EMPTY_PANEL_TEXT};
use ftdm_app::config::Settings;
use ftdm_app::handler::update;
use ftdm_app::Message;
use ftdm_core::{Page, StaticTheme, ThemeMode};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(120, 36);
    term.draw_with(|frame| view(frame, state));
    term
}

fn gated_state() -> AppState {
    let mut settings = Settings::default();
    settings.download.require_auth = true;
    settings.download.access_code = Some("eftdm".to_string());
    AppState::with_settings(settings, Box::new(StaticTheme::new(ThemeMode::Dark)))
}

// ─────────────────────────────────────────────────────────
// Page
// ─────────────────────────────────────────────────────────

#[test]
fn test_initial_screen() {
    let state = AppState::new();
    let term = draw(&state);

    assert!(term.buffer_contains("EFTDM Framework"));
    assert!(term.buffer_contains("GETTING STARTED"));
    assert!(term.buffer_contains("Why FTDM"));
    assert!(term.buffer_contains("Fast-Track Development"));
    assert!(term.buffer_contains("1/6 introduction"));
}

#[test]
fn test_sidebar_can_be_hidden() {
    let mut state = AppState::new();
    update(&mut state, Message::ToggleSidebar);
    let term = draw(&state);

    assert!(!term.buffer_contains("GETTING STARTED"));
    assert!(term.buffer_contains("Why FTDM"));
}

#[test]
fn test_navigation_changes_page_body() {
    let mut state = AppState::new();
    update(&mut state, Message::GoToPage(Page::StageOverview));
    let term = draw(&state);

    assert!(term.buffer_contains("7-Stage Automation Process"));
    assert!(term.buffer_contains("3/6 stage-overview"));
    assert!(!term.buffer_contains("Why FTDM"));
}

#[test]
fn test_records_drawn_in_registry_order() {
    let mut state = AppState::new();
    update(&mut state, Message::GoToPage(Page::StageOverview));
    let term = draw(&state);

    let section = term.row_of("7-Stage Automation Process").unwrap();
    let first = term.row_of("Mermaid Generation").unwrap();
    let second = term.row_of("FSD Creation").unwrap();
    assert!(section < first);
    assert!(first < second);
}

#[test]
fn test_toggle_selected_expands_in_frame() {
    let mut state = AppState::new();
    update(&mut state, Message::ToggleSelected);
    assert!(draw(&state).buffer_contains(EMPTY_PANEL_TEXT));

    update(&mut state, Message::ToggleSelected);
    assert!(!draw(&state).buffer_contains(EMPTY_PANEL_TEXT));
}

#[test]
fn test_view_is_pure() {
    let mut state = AppState::new();
    update(&mut state, Message::GoToPage(Page::Safeguards));
    update(&mut state, Message::ToggleSelected);

    let first = draw(&state);
    let second = draw(&state);
    assert_eq!(first.buffer(), second.buffer());
}

#[test]
fn test_theme_selects_palette() {
    let mut state = AppState::new();
    assert_eq!(draw(&state).buffer()[(0, 0)].fg, DARK.border_dim);

    update(&mut state, Message::ToggleTheme);
    assert_eq!(draw(&state).buffer()[(0, 0)].fg, LIGHT.border_dim);
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Download"));
}

// ─────────────────────────────────────────────────────────
// Download Dialog
// ─────────────────────────────────────────────────────────

#[test]
fn test_dialog_shows_tree_and_clone_command() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let term = draw(&state);

    assert!(term.buffer_contains("Download EFTDM Framework"));
    assert!(term.buffer_contains("Framework structure"));
    assert!(term.buffer_contains("EFTDM_FRAMEWORK"));
    assert!(term.buffer_contains("git clone https://github.com/Rohith-Rathan"));
    assert!(!term.buffer_contains(BUSY_TEXT));
}

#[test]
fn test_dialog_busy_and_failed_states() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    let ticket = match update(&mut state, Message::StartDownload).action {
        Some(ftdm_app::UpdateAction::StartDownload { ticket, .. }) => ticket,
        other => panic!("expected StartDownload, got {other:?}"),
    };
    assert!(draw(&state).buffer_contains(BUSY_TEXT));

    update(
        &mut state,
        Message::DownloadFinished {
            ticket,
            result: Err("Download failed. no opener".to_string()),
        },
    );
    let term = draw(&state);
    assert!(!term.buffer_contains(BUSY_TEXT));
    assert!(term.buffer_contains("Download failed. no opener"));
}

#[test]
fn test_closed_dialog_is_not_drawn() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenDownload);
    update(&mut state, Message::CloseDownload);
    assert!(!draw(&state).buffer_contains("Framework structure"));
}

#[test]
fn test_locked_dialog_masks_code() {
    let mut state = gated_state();
    update(&mut state, Message::OpenDownload);
    for c in "eft".chars() {
        update(&mut state, Message::CodeInput(c));
    }

    let term = draw(&state);
    assert!(term.buffer_contains("This download is protected."));
    assert!(term.buffer_contains("•••"));
    assert!(!term.buffer_contains("Access code: eft"));
    assert!(!term.buffer_contains("Framework structure"));

    update(&mut state, Message::ToggleCodeReveal);
    assert!(draw(&state).buffer_contains("Access code: eft"));
}

#[test]
fn test_wrong_code_shows_error() {
    let mut state = gated_state();
    update(&mut state, Message::OpenDownload);
    update(&mut state, Message::CodeInput('x'));
    update(&mut state, Message::SubmitCode);

    assert!(draw(&state).buffer_contains(ftdm_core::modal::WRONG_CODE_MESSAGE));
}
