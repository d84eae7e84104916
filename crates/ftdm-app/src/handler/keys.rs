//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use ftdm_core::Page;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::DownloadDialog if state.download.is_locked() => handle_key_access_code(key),
        UiMode::DownloadDialog => handle_key_download_dialog(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Pages
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextPage),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousPage),
        InputKey::Char(c) if c.is_ascii_digit() => key
            .digit()
            .and_then(Page::from_number)
            .map(Message::GoToPage),

        // Accordion cursor
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorLast),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),
        InputKey::Char('c') => Some(Message::CollapseAll),

        InputKey::Char('d') => Some(Message::OpenDownload),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('b') => Some(Message::ToggleSidebar),

        _ => None,
    }
}

fn handle_key_download_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseDownload),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Enter | InputKey::Char('d') => Some(Message::StartDownload),
        InputKey::Char('o') => Some(Message::OpenRepository),

        // Framework structure preview
        InputKey::Char('j') | InputKey::Down => Some(Message::TreeDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::TreeUp),
        InputKey::Char(' ') => Some(Message::TreeToggle),

        _ => None,
    }
}

/// Locked gate: printable keys go into the access code field
fn handle_key_access_code(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseDownload),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('r') | InputKey::Tab => Some(Message::ToggleCodeReveal),
        InputKey::Enter => Some(Message::SubmitCode),
        InputKey::Backspace => Some(Message::CodeBackspace),
        InputKey::Char(c) => Some(Message::CodeInput(c)),
        _ => None,
    }
}
