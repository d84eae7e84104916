//! Docs page body: title, lead, stats strip and one accordion per section
//!
//! Paints the rows produced by [`ftdm_core::render_section`]; it never decides
//! what is visible on its own.

use ftdm_app::PageViewState;
use ftdm_core::{registry::SectionKey, IconName, ItemPrefix, SectionOptions, SectionRow, STATS};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::wrap::{truncate, wrap};
use crate::theme::{styles, IconSet, Palette};

const SUMMARY_INDENT: usize = 4;
const PANEL_INDENT: usize = 6;
const ITEM_INDENT: usize = 8;

pub const EMPTY_PANEL_TEXT: &str = "No further details.";

/// Lines of a page plus where the cursor record sits in them
#[derive(Debug, Default)]
struct PageLines {
    lines: Vec<Line<'static>>,
    /// First line of the selected header
    cursor_line: Option<usize>,
    /// One past the last line of the selected record's block
    cursor_end: usize,
}

/// Scroll offset that keeps the selected header on screen and shows as much
/// of its panel as fits
pub fn scroll_offset(cursor_line: usize, cursor_end: usize, height: usize) -> usize {
    cursor_line.min(cursor_end.saturating_sub(height))
}

pub struct PageView<'a> {
    view: &'a PageViewState,
    options: SectionOptions,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> PageView<'a> {
    pub fn new(
        view: &'a PageViewState,
        options: SectionOptions,
        palette: &'a Palette,
        icons: IconSet,
    ) -> Self {
        Self {
            view,
            options,
            palette,
            icons,
        }
    }

    fn build(&self, width: usize) -> PageLines {
        let p = self.palette;
        let page = self.view.page();
        let mut out = PageLines::default();

        out.lines.push(Line::from(vec![
            Span::styled(self.icons.icon(page.icon()), styles::accent(p)),
            Span::raw(" "),
            Span::styled(page.title(), styles::text_primary(p).add_modifier(Modifier::BOLD)),
        ]));
        out.lines.push(Line::default());
        for line in wrap(page.lead(), width) {
            out.lines.push(Line::styled(line, styles::text_secondary(p)));
        }
        out.lines.push(Line::default());

        if page.shows_stats() {
            self.push_stats(width, &mut out.lines);
            out.lines.push(Line::default());
        }

        let cursor = self.view.cursor();
        let mut header_index = 0;
        let mut in_cursor_block = false;

        for (key, rows) in self.view.sections(self.options) {
            self.push_section_title(key, &mut out.lines);

            for row in &rows {
                let selected = row.is_header() && header_index == cursor;
                if row.is_header() {
                    if in_cursor_block {
                        out.cursor_end = out.lines.len();
                        in_cursor_block = false;
                    }
                    if selected {
                        out.cursor_line = Some(out.lines.len());
                        in_cursor_block = true;
                    }
                    header_index += 1;
                }
                self.push_row(row, selected, width, &mut out.lines);
            }

            if in_cursor_block {
                out.cursor_end = out.lines.len();
                in_cursor_block = false;
            }
            out.lines.push(Line::default());
        }

        out
    }

    fn push_stats(&self, width: usize, lines: &mut Vec<Line<'static>>) {
        let p = self.palette;
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for stat in STATS {
            // icon, space, value, space, label, two spaces
            let cell_width = 1 + 1 + stat.value.width() + 1 + stat.label.width() + 2;
            if used > 0 && used + cell_width > width {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            spans.push(Span::styled(self.icons.icon(stat.icon), styles::accent(p)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(stat.value, styles::accent_bold(p)));
            spans.push(Span::styled(format!(" {}  ", stat.label), styles::text_muted(p)));
            used += cell_width;
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
    }

    fn push_section_title(&self, key: SectionKey, lines: &mut Vec<Line<'static>>) {
        let p = self.palette;
        lines.push(Line::from(vec![
            Span::styled("━━ ", styles::border_active(p)),
            Span::styled(key.title(), styles::accent_bold(p)),
        ]));
    }

    fn push_row(
        &self,
        row: &SectionRow,
        selected: bool,
        width: usize,
        lines: &mut Vec<Line<'static>>,
    ) {
        let p = self.palette;
        match row {
            SectionRow::Header {
                label,
                summary,
                icon,
                tone,
                duration,
                expanded,
                ..
            } => {
                let chevron_style = if selected {
                    styles::accent_bold(p)
                } else {
                    styles::text_muted(p)
                };
                let mut spans = vec![
                    Span::styled(self.icons.chevron(*expanded), chevron_style),
                    Span::raw(" "),
                    Span::styled(self.icons.icon(*icon), styles::text_primary(p).fg(p.tone(*tone))),
                    Span::raw(" "),
                ];
                let used: usize = spans.iter().map(Span::width).sum();

                let badge = duration.map(|d| format!("{} {d}", self.icons.icon(IconName::Clock)));
                let badge_width = badge.as_deref().map_or(0, |b| b.width() + 1);
                let label_room = width.saturating_sub(used + badge_width);
                let label = truncate(label, label_room);
                let label_width = label.width();
                spans.push(Span::styled(
                    label,
                    styles::text_primary(p).add_modifier(Modifier::BOLD),
                ));

                if let Some(badge) = badge {
                    let gap = width.saturating_sub(used + label_width + badge.width());
                    spans.push(Span::raw(" ".repeat(gap.max(1))));
                    spans.push(Span::styled(badge, styles::keybinding(p)));
                }

                let mut line = Line::from(spans);
                if selected {
                    let padding = width.saturating_sub(line.width());
                    line.push_span(Span::raw(" ".repeat(padding)));
                    line = line.style(styles::selected_row(p));
                }
                lines.push(line);

                for text in wrap(summary, width.saturating_sub(SUMMARY_INDENT)) {
                    lines.push(indented(SUMMARY_INDENT, text, styles::text_muted(p)));
                }
            }

            SectionRow::Details { text } => {
                for line in wrap(text, width.saturating_sub(PANEL_INDENT)) {
                    lines.push(indented(PANEL_INDENT, line, styles::text_secondary(p)));
                }
            }

            SectionRow::SubHeading { label } => {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(PANEL_INDENT)),
                    Span::styled(*label, styles::accent_bold(p)),
                ]));
            }

            SectionRow::Item { prefix, text } => {
                let (marker, marker_style) = match prefix {
                    ItemPrefix::Index(n) => (format!("{n}."), styles::keybinding(p)),
                    ItemPrefix::Icon(icon) => {
                        (self.icons.icon(*icon).to_string(), styles::status_green(p))
                    }
                    ItemPrefix::None => ("•".to_string(), styles::text_muted(p)),
                };
                let hang = ITEM_INDENT + marker.width() + 1;
                for (i, line) in wrap(text, width.saturating_sub(hang)).into_iter().enumerate() {
                    let lead = if i == 0 {
                        Span::styled(
                            format!("{}{marker} ", " ".repeat(ITEM_INDENT)),
                            marker_style,
                        )
                    } else {
                        Span::raw(" ".repeat(hang))
                    };
                    lines.push(Line::from(vec![
                        lead,
                        Span::styled(line, styles::text_primary(p)),
                    ]));
                }
            }

            SectionRow::EmptyPanel => {
                lines.push(indented(
                    PANEL_INDENT,
                    EMPTY_PANEL_TEXT.to_string(),
                    styles::text_muted(p).add_modifier(Modifier::ITALIC),
                ));
            }
        }
    }
}

fn indented(indent: usize, text: String, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![Span::raw(" ".repeat(indent)), Span::styled(text, style)])
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, true);
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let built = self.build(inner.width as usize);
        let offset = built
            .cursor_line
            .map_or(0, |line| scroll_offset(line, built.cursor_end, inner.height as usize));

        Paragraph::new(built.lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use ftdm_app::config::IconMode;
    use ftdm_core::Page;

    fn render(
        view: &PageViewState,
        options: SectionOptions,
        width: u16,
        height: u16,
    ) -> TestTerminal {
        let mut term = TestTerminal::with_size(width, height);
        let widget = PageView::new(view, options, &DARK, IconSet::new(IconMode::Unicode));
        term.render_widget(widget, term.area());
        term
    }

    #[test]
    fn test_scroll_offset() {
        // Header and block fit from the top
        assert_eq!(scroll_offset(5, 10, 20), 0);
        // Block runs past the bottom: scroll just enough
        assert_eq!(scroll_offset(15, 30, 20), 10);
        // Block taller than the screen: header pinned to the top
        assert_eq!(scroll_offset(15, 60, 20), 15);
    }

    #[test]
    fn test_collapsed_page_shows_headers_only() {
        let view = PageViewState::new(Page::StageOverview);
        let term = render(&view, SectionOptions::default(), 100, 40);

        assert!(term.buffer_contains("Stage Overview"));
        assert!(term.buffer_contains("7-Stage Automation Process"));
        assert!(term.buffer_contains("Stage 1 - Mermaid Generation"));
        assert!(term.buffer_contains("Generate visual diagrams and refine requirements"));
        assert!(!term.buffer_contains("Raw Requirements"));
    }

    #[test]
    fn test_expanded_record_shows_panel() {
        let mut view = PageViewState::new(Page::StageOverview);
        view.toggle_selected();
        let term = render(&view, SectionOptions::default(), 100, 40);

        assert!(term.buffer_contains("Inputs"));
        assert!(term.buffer_contains("Raw Requirements"));
        assert!(term.buffer_contains("1. Analyze raw requirements for completeness"));
        assert!(term.buffer_contains("5-10 minutes"));
        assert!(term.buffer_contains("Transforms raw requirements"));
    }

    #[test]
    fn test_options_hide_duration_and_details() {
        let mut view = PageViewState::new(Page::StageOverview);
        view.toggle_selected();
        let options = SectionOptions {
            show_durations: false,
            show_detailed_descriptions: false,
        };
        let term = render(&view, options, 100, 40);

        assert!(term.buffer_contains("Raw Requirements"));
        assert!(!term.buffer_contains("5-10 minutes"));
        assert!(!term.buffer_contains("Transforms raw requirements"));
    }

    #[test]
    fn test_introduction_has_stats_strip() {
        let view = PageViewState::new(Page::Introduction);
        let term = render(&view, SectionOptions::default(), 120, 30);
        assert!(term.buffer_contains("Automated Stages"));

        let view = PageViewState::new(Page::Safeguards);
        let term = render(&view, SectionOptions::default(), 120, 30);
        assert!(!term.buffer_contains("Automated Stages"));
    }

    #[test]
    fn test_feature_without_details_shows_empty_panel() {
        let mut view = PageViewState::new(Page::Introduction);
        view.toggle_selected();
        let term = render(&view, SectionOptions::default(), 120, 40);
        assert!(term.buffer_contains(EMPTY_PANEL_TEXT));
    }

    #[test]
    fn test_cursor_scrolls_into_view() {
        let mut view = PageViewState::new(Page::StageOverview);
        view.cursor_last();
        view.toggle_selected();
        let term = render(&view, SectionOptions::default(), 100, 20);

        assert!(term.buffer_contains("Stage 6.13"));
        assert!(!term.buffer_contains("Stage 1 - Mermaid Generation"));
    }

    #[test]
    fn test_selected_header_is_highlighted() {
        let view = PageViewState::new(Page::Scenarios);
        let term = render(&view, SectionOptions::default(), 100, 30);

        let row = (0..30)
            .find(|&y| term.line_contains(y, "▸"))
            .expect("a header row");
        assert_eq!(term.buffer()[(50, row)].bg, DARK.selected_bg);
    }
}
