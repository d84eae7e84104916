pub mod accordion;
pub mod badge;
pub mod code_block;
pub mod download_modal;
pub mod file_tree;
pub mod footer;
pub mod icons;
pub mod navbar;
