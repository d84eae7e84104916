//! Archive structure preview inside the download dialog

use ftdm_core::FileTreeState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::wrap::truncate;
use crate::theme::{styles, IconSet, Palette};

pub struct FileTreeView<'a> {
    tree: &'a FileTreeState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> FileTreeView<'a> {
    pub fn new(tree: &'a FileTreeState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            tree,
            palette,
            icons,
        }
    }
}

impl Widget for FileTreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let p = self.palette;
        let width = area.width as usize;
        let height = area.height as usize;
        let rows = self.tree.visible_rows();
        let selected = self.tree.selected_index();

        // Keep the selection on screen
        let offset = (selected + 1).saturating_sub(height);

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, row)| {
                let (glyph, name_style) = if row.node.is_folder() {
                    (self.icons.folder(row.expanded), styles::accent(p))
                } else {
                    (self.icons.file(), styles::text_secondary(p))
                };
                let indent = " ".repeat(row.depth * 2);
                let room = width.saturating_sub(indent.len() + 2);
                let line = Line::from(vec![
                    Span::raw(indent),
                    Span::styled(glyph, name_style),
                    Span::raw(" "),
                    Span::styled(truncate(row.node.name, room), name_style),
                ]);

                if i == selected {
                    let padding = width.saturating_sub(line.width());
                    let mut line = line;
                    line.push_span(Span::raw(" ".repeat(padding)));
                    line.style(styles::focused_selected(p))
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
