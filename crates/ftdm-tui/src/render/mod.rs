//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ftdm_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{palette_for, IconSet};
use crate::widgets::{modal_overlay, DownloadDialog, MainHeader, PageView, Sidebar, StatusBar};
use crate::layout;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the same state always draws the same frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = palette_for(state.theme());
    let icons = IconSet::new(state.settings.ui.icons);

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area, state.sidebar_visible);

    frame.render_widget(
        MainHeader::new(state.page(), state.theme(), palette, icons),
        areas.header,
    );

    if let Some(sidebar) = areas.sidebar {
        frame.render_widget(Sidebar::new(state.page(), palette, icons), sidebar);
    }

    frame.render_widget(
        PageView::new(&state.view, state.section_options(), palette, icons),
        areas.content,
    );

    frame.render_widget(StatusBar::new(state, palette), areas.status);

    if state.ui_mode == UiMode::DownloadDialog {
        modal_overlay::dim_background(frame.buffer_mut(), area, palette);
        frame.render_widget(DownloadDialog::new(state, palette, icons), area);
    }
}
