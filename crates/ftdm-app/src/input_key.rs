//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so the
//! handlers here can be driven (and tested) without a terminal.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Digit value of a plain number key
    pub fn digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}
