//! ftdm-app - Application state and orchestration for the FTDM docs browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: terminal input becomes a [`Message`], [`handler::update`]
//! mutates [`AppState`], and any side effect comes back as an
//! [`UpdateAction`] that [`actions::handle_action`] runs on tokio. It also
//! owns configuration loading and the file-backed theme provider.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod theme_store;

// Re-export primary types
pub use actions::{DownloadTask, SystemOpener, UrlOpener};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, PageViewState, UiMode};
pub use theme_store::FileThemeStore;
