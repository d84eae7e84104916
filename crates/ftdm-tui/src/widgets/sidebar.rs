//! Page navigation sidebar

use ftdm_core::{Page, NAV_GROUPS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::wrap::truncate;
use crate::theme::{styles, IconSet, Palette};

/// Grouped page list; pages are numbered for the digit shortcuts
pub struct Sidebar<'a> {
    current: Page,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(current: Page, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            current,
            palette,
            icons,
        }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();

        for (i, group) in NAV_GROUPS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(
                group.title.to_uppercase(),
                styles::text_muted(p).add_modifier(Modifier::BOLD),
            ));

            for page in group.pages {
                let number = Page::ALL
                    .iter()
                    .position(|candidate| candidate == page)
                    .map_or(0, |i| i + 1);
                let label = truncate(page.title(), width.saturating_sub(7));
                let mut line = Line::from(vec![
                    Span::styled(format!(" {number} "), styles::keybinding(p)),
                    Span::raw(self.icons.icon(page.icon())),
                    Span::raw(" "),
                    Span::raw(label),
                ]);

                line = if *page == self.current {
                    let padding = width.saturating_sub(line.width());
                    line.push_span(Span::raw(" ".repeat(padding)));
                    line.style(styles::focused_selected(p))
                } else {
                    line.style(styles::text_secondary(p))
                };
                lines.push(line);
            }
        }

        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(" Documentation ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        Paragraph::new(self.lines(inner.width as usize)).render(inner, buf);
    }
}
