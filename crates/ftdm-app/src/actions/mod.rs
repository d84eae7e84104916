//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! - `download`: the cancellable download task
//! - `opener`: the [`UrlOpener`] seam and its system implementation

mod download;
mod opener;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::handler::UpdateAction;
use crate::message::Message;

pub use download::{spawn_download, DownloadRequest, DownloadTask};
pub use opener::{validate_url, SystemOpener, UrlOpener};

#[cfg(test)]
pub use opener::MockUrlOpener;

/// Everything background tasks need from the event loop
#[derive(Clone)]
pub struct ActionContext {
    pub msg_tx: mpsc::Sender<Message>,
    pub opener: Arc<dyn UrlOpener>,
}

impl ActionContext {
    pub fn new(msg_tx: mpsc::Sender<Message>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { msg_tx, opener }
    }
}

/// Execute an action by spawning a background task
///
/// `download_task` is the slot holding the in-flight download; starting a
/// new one replaces (and cancels) whatever was there.
pub fn handle_action(
    action: UpdateAction,
    ctx: &ActionContext,
    download_task: &mut Option<DownloadTask>,
) {
    match action {
        UpdateAction::StartDownload {
            ticket,
            archive_url,
            delay,
            auto_close_delay,
        } => {
            if let Some(previous) = download_task.take() {
                previous.cancel();
            }
            *download_task = Some(spawn_download(
                DownloadRequest {
                    ticket,
                    archive_url,
                    delay,
                    auto_close_delay,
                },
                ctx.opener.clone(),
                ctx.msg_tx.clone(),
            ));
        }

        UpdateAction::CancelDownload { ticket } => match download_task.take() {
            Some(task) if task.ticket() == ticket => task.cancel(),
            Some(task) => {
                debug!(
                    "Cancel for {} ignored, running task is {}",
                    ticket,
                    task.ticket()
                );
                *download_task = Some(task);
            }
            None => debug!("Cancel for {} ignored, no task running", ticket),
        },

        UpdateAction::OpenUrl { url } => {
            let opener = ctx.opener.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                if let Err(e) = opener.open(&url) {
                    error!("Failed to open {}: {}", url, e);
                    let _ = msg_tx
                        .send(Message::UrlOpenFailed {
                            url,
                            reason: e.to_string(),
                        })
                        .await;
                }
            });
        }
    }
}
