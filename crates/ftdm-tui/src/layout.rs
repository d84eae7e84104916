//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom, and the page body in between,
//! optionally split into sidebar and content.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width including its border
pub const SIDEBAR_WIDTH: u16 = 32;

/// Narrower than this and the sidebar is dropped even when enabled
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Site title, theme indicator and key hints
    pub header: Rect,

    /// Page navigation, absent when hidden or too narrow
    pub sidebar: Option<Rect>,

    /// Page title, lead and accordions
    pub content: Rect,

    /// Single-line status bar
    pub status: Rect,
}

/// Split the screen
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_sidebar` - Whether the user wants the sidebar
pub fn create(area: Rect, show_sidebar: bool) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    if show_sidebar && area.width >= MIN_WIDTH_FOR_SIDEBAR {
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .areas(body);
        ScreenAreas {
            header,
            sidebar: Some(sidebar),
            content,
            status,
        }
    } else {
        ScreenAreas {
            header,
            sidebar: None,
            content: body,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_sidebar() {
        let layout = create(Rect::new(0, 0, 100, 30), true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 29);

        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(sidebar.height, 26); // 30 - 3 - 1
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.width, 100 - SIDEBAR_WIDTH);
    }

    #[test]
    fn test_layout_hidden_sidebar() {
        let layout = create(Rect::new(0, 0, 100, 30), false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 100);
    }

    #[test]
    fn test_narrow_terminal_drops_sidebar() {
        let layout = create(Rect::new(0, 0, 60, 20), true);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 60);
    }
}
