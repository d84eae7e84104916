//! Header bar widget
//!
//! Site title, current page, key hints and the theme indicator.

use ftdm_core::{IconName, Page, ThemeMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, IconSet, Palette};

pub const SITE_TITLE: &str = "EFTDM Framework";

/// Main header showing the site title, the current page and shortcuts
pub struct MainHeader<'a> {
    page: Page,
    theme: ThemeMode,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(page: Page, theme: ThemeMode, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            page,
            theme,
            palette,
            icons,
        }
    }

    fn hint(&self, key: &'static str, label: &'static str) -> [Span<'static>; 3] {
        [
            Span::styled(key, styles::keybinding(self.palette)),
            Span::styled(format!(" {label}"), styles::text_muted(self.palette)),
            Span::raw("  "),
        ]
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let p = self.palette;
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.icon(IconName::Layers), styles::accent(p)),
            Span::raw(" "),
            Span::styled(SITE_TITLE, styles::accent_bold(p)),
            Span::styled(" / ", styles::text_muted(p)),
            Span::styled(self.page.title(), styles::text_secondary(p)),
        ]);
        let title_width = title.width() as u16;
        Paragraph::new(title).render(inner, buf);

        let mut right: Vec<Span> = Vec::new();
        right.extend(self.hint("d", "Download"));
        right.extend(self.hint("t", "Theme"));
        right.extend(self.hint("q", "Quit"));
        right.push(Span::styled(
            self.icons.theme(self.theme == ThemeMode::Dark),
            styles::accent(p),
        ));
        right.push(Span::raw(" "));
        let right = Line::from(right);

        // Hints only when they fit beside the title
        if title_width + right.width() as u16 + 2 <= inner.width {
            Paragraph::new(right)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use ftdm_app::config::IconMode;

    fn header(page: Page) -> MainHeader<'static> {
        MainHeader::new(page, ThemeMode::Dark, &DARK, IconSet::new(IconMode::Unicode))
    }

    #[test]
    fn test_header_shows_title_and_page() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(header(Page::Safeguards), term.area());

        assert!(term.buffer_contains("EFTDM Framework"));
        assert!(term.buffer_contains("Anti-Hallucination Safeguards"));
        assert!(term.buffer_contains("Download"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(header(Page::Introduction), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("EFTDM Framework"));
        assert!(!term.buffer_contains("Quit"));
    }
}
