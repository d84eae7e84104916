//! Status bar widget
//!
//! Page position, the last status notice, and context key hints.

use ftdm_app::{AppState, UiMode};
use ftdm_core::Page;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// Single-line status bar showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn position(&self) -> Span<'static> {
        let page = self.state.page();
        let number = Page::ALL.iter().position(|p| *p == page).map_or(0, |i| i + 1);
        Span::styled(
            format!(" {number}/{} {} ", Page::ALL.len(), page.slug()),
            styles::focused_selected(self.palette),
        )
    }

    fn hints(&self) -> &'static str {
        match self.state.ui_mode {
            UiMode::Normal => "j/k Move  Enter Toggle  c Collapse  1-6 Page  b Sidebar ",
            UiMode::DownloadDialog if self.state.download.is_locked() => {
                "Type the access code "
            }
            UiMode::DownloadDialog => "Enter Download  o GitHub  Esc Close ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        buf.set_style(area, Style::default().bg(p.card_bg));

        let mut left = vec![self.position(), Span::raw(" ")];
        if let Some(message) = &self.state.status_message {
            left.push(Span::styled(message.clone(), styles::text_primary(p)));
        }
        let left = Line::from(left);
        let left_width = left.width() as u16;
        Paragraph::new(left).render(area, buf);

        let hints = Line::styled(self.hints(), styles::text_muted(p));
        if left_width + hints.width() as u16 <= area.width {
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_status_bar_shows_position_and_hints() {
        let mut state = AppState::new();
        state.go_to_page(Page::Scenarios);

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state, &DARK), term.area());

        assert!(term.buffer_contains("4/6 scenarios"));
        assert!(term.buffer_contains("Enter Toggle"));
    }

    #[test]
    fn test_status_message_is_shown() {
        let mut state = AppState::new();
        state.status_message = Some("Theme: light".to_string());

        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state, &DARK), term.area());

        assert!(term.buffer_contains("Theme: light"));
    }
}
