//! Page and accordion cursor handlers

use crate::state::AppState;
use ftdm_core::Page;
use tracing::debug;

use super::UpdateResult;

/// Switch page; the previous page's accordions are dropped
pub fn handle_go_to_page(state: &mut AppState, page: Page) -> UpdateResult {
    if state.page() != page {
        debug!("Navigating {} -> {}", state.page(), page);
        state.status_message = None;
    }
    state.go_to_page(page);
    UpdateResult::none()
}

pub fn handle_toggle_selected(state: &mut AppState) -> UpdateResult {
    if let Some(target) = state.view.toggle_selected() {
        let expanded = state
            .view
            .accordion(target.section)
            .is_some_and(|acc| acc.is_expanded(target.id));
        debug!(
            "Toggled record {} (expanded: {})",
            target.id.as_str(),
            expanded
        );
    }
    UpdateResult::none()
}
