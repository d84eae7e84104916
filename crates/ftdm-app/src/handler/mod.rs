//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Page and accordion cursor handlers
//! - `download`: Download dialog handlers

pub(crate) mod download;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;
use ftdm_core::ActionTicket;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run the download for `ticket` in the background
    StartDownload {
        ticket: ActionTicket,
        archive_url: String,
        /// Wait before handing the archive to the opener
        delay: Duration,
        /// Extra wait after success, before reporting (auto-close policy)
        auto_close_delay: Option<Duration>,
    },

    /// Stop the background download for `ticket`, if it is still running
    CancelDownload { ticket: ActionTicket },

    /// Open a link in the browser, outside the download flow
    OpenUrl { url: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
