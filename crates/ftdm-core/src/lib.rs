//! # ftdm-core - Content and UI State
//!
//! Foundation crate for the FTDM docs. Holds the static content registry and
//! the front-end agnostic state machines that both the terminal browser and
//! the website drive.
//!
//! This crate has **zero internal dependencies** and builds for `wasm32` with
//! `default-features = false` (which drops file logging).
//!
//! ## Public API
//!
//! ### Content (`content`, `registry`)
//! - [`ContentRecord`] - One collapsible unit (stage, safeguard, scenario, benefit)
//! - [`SectionKey`] - Names a registry; [`registry::records`] reads it
//!
//! ### State machines
//! - [`Accordion`] - Single-expand accordion
//! - [`DownloadModal`] - Download dialog lifecycle with busy guard and access gate
//! - [`FileTreeState`] - Framework archive preview
//! - [`ThemeProvider`] - Injected light/dark capability
//!
//! ### Rendering (`section_view`)
//! - [`render_section`] - Pure `(records, accordion, options) -> rows` mapping
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; `is_recoverable` marks opener failures worth retrying
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use ftdm_core::prelude::*;
//! ```

pub mod accordion;
pub mod content;
pub mod error;
pub mod file_tree;
#[cfg(feature = "logging")]
pub mod logging;
pub mod modal;
pub mod nav;
pub mod prelude;
pub mod registry;
pub mod section_view;
pub mod theme;

pub use accordion::Accordion;
pub use content::{ContentRecord, DetailSection, IconName, ItemMarker, RecordId, Tone, VisualTag};
pub use error::{Error, Result, ResultExt};
pub use file_tree::{FileNode, FileTreeState, NodeKind, TreeRow, FRAMEWORK_TREE};
pub use modal::{ActionOutcome, ActionTicket, AuthGate, Completion, DownloadModal, ModalPolicy};
pub use nav::{NavGroup, Page, NAV_GROUPS};
pub use registry::{SectionKey, Stat, STATS};
pub use section_view::{render_records, render_section, ItemPrefix, SectionOptions, SectionRow};
pub use theme::{StaticTheme, ThemeMode, ThemePreference, ThemeProvider};
