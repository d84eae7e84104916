//! Framework download dialog
//!
//! Two faces: the access-code form while the gate is locked, and the
//! download panel (archive preview, clone command, progress) once open.

use ftdm_app::AppState;
use ftdm_core::{file_tree::file_count, AuthGate, IconName, FRAMEWORK_TREE};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, clear_area, render_shadow};
use super::FileTreeView;
use crate::theme::{styles, IconSet, Palette};

pub const DIALOG_TITLE: &str = " Download EFTDM Framework ";
pub const BUSY_TEXT: &str = "Preparing download...";

const DIALOG_WIDTH: u16 = 78;
const DIALOG_HEIGHT: u16 = 28;
const LOCKED_HEIGHT: u16 = 12;

pub struct DownloadDialog<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> DownloadDialog<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }

    /// Rect the dialog occupies inside `area`
    pub fn rect(&self, area: Rect) -> Rect {
        let height = if self.state.download.is_locked() {
            LOCKED_HEIGHT
        } else {
            DIALOG_HEIGHT
        };
        centered_rect(
            DIALOG_WIDTH.min(area.width.saturating_sub(4)),
            height.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn hints(&self, pairs: &[(&'static str, &'static str)]) -> Line<'static> {
        let p = self.palette;
        let spans = pairs.iter().flat_map(|(key, label)| {
            [
                Span::styled(format!("[{key}]"), styles::keybinding(p)),
                Span::styled(format!(" {label}  "), styles::text_muted(p)),
            ]
        });
        Line::from(spans.collect::<Vec<_>>())
    }

    fn render_locked(
        &self,
        input: &str,
        reveal: bool,
        error: Option<&str>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let p = self.palette;
        let shown = if reveal {
            input.to_string()
        } else {
            "•".repeat(input.chars().count())
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icons.icon(IconName::Lock), styles::keybinding(p)),
                Span::styled(
                    " This download is protected.",
                    styles::text_primary(p).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::styled(
                "Enter the access code to continue.",
                styles::text_secondary(p),
            ),
            Line::default(),
            Line::from(vec![
                Span::styled("Access code: ", styles::text_secondary(p)),
                Span::styled(shown, styles::accent_bold(p)),
                Span::styled("▏", styles::accent(p)),
            ]),
            Line::default(),
        ];
        if let Some(error) = error {
            lines.push(Line::styled(error.to_string(), styles::status_red(p)));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        lines.push(self.hints(&[
            ("Enter", "Unlock"),
            ("Tab", if reveal { "Hide" } else { "Show" }),
            ("Esc", "Cancel"),
        ]));

        Paragraph::new(lines).render(area, buf);
    }

    fn render_open(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = &self.state.download;
        let settings = &self.state.settings.download;

        let [intro, tree_title, tree, clone, status, hints] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(
            "Everything needed to run all seven stages: prompts, validation \
             frameworks, templates and helper scripts.",
        )
        .style(styles::text_secondary(p))
        .wrap(Wrap { trim: true })
        .render(intro, buf);

        Line::from(vec![
            Span::styled(self.icons.icon(IconName::Package), styles::accent(p)),
            Span::styled(" Framework structure", styles::accent_bold(p)),
            Span::styled(
                format!(" ({} files)", file_count(FRAMEWORK_TREE)),
                styles::text_muted(p),
            ),
        ])
        .render(tree_title, buf);

        FileTreeView::new(&self.state.file_tree, p, self.icons).render(tree, buf);

        Paragraph::new(vec![
            Line::default(),
            Line::from(vec![
                Span::styled(self.icons.github(), styles::text_secondary(p)),
                Span::styled(" Or clone with git:", styles::text_secondary(p)),
            ]),
            Line::styled(
                format!("  {}", settings.clone_command()),
                styles::text_primary(p),
            ),
        ])
        .render(clone, buf);

        let status_line = if modal.is_busy() {
            Line::from(vec![
                Span::styled(self.icons.spinner(self.state.tick), styles::accent(p)),
                Span::styled(format!(" {BUSY_TEXT}"), styles::accent(p)),
            ])
        } else if let Some(error) = modal.error() {
            Line::from(vec![
                Span::styled(self.icons.icon(IconName::XCircle), styles::status_red(p)),
                Span::styled(format!(" {error}"), styles::status_red(p)),
            ])
        } else {
            Line::default()
        };
        Paragraph::new(vec![Line::default(), status_line]).render(status, buf);

        let download_label = if modal.is_busy() {
            "Downloading..."
        } else {
            "Download ZIP"
        };
        self.hints(&[
            ("Enter", download_label),
            ("o", "View on GitHub"),
            ("Space", "Fold"),
            ("Esc", "Close"),
        ])
        .render(hints, buf);
    }
}

impl Widget for DownloadDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = self.rect(area);
        if rect.width < 4 || rect.height < 4 {
            return;
        }

        render_shadow(buf, rect, self.palette);
        clear_area(buf, rect);

        let block = styles::modal_block(self.palette, DIALOG_TITLE);
        let inner = block.inner(rect).inner(Margin::new(1, 0));
        block.render(rect, buf);

        match self.state.download.gate() {
            AuthGate::Locked {
                input,
                reveal,
                error,
            } => self.render_locked(input, *reveal, error.as_deref(), inner, buf),
            AuthGate::Open => self.render_open(inner, buf),
        }
    }
}
