//! Custom widget components

mod download_dialog;
mod file_tree;
mod header;
pub mod modal_overlay;
mod page_view;
mod sidebar;
mod status_bar;
mod wrap;

pub use download_dialog::{DownloadDialog, BUSY_TEXT, DIALOG_TITLE};
pub use file_tree::FileTreeView;
pub use header::{MainHeader, SITE_TITLE};
pub use page_view::{scroll_offset, PageView, EMPTY_PANEL_TEXT};
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
