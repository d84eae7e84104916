//! Cancellable background download
//!
//! `spawn_download` waits out the configured delay, hands the archive URL to
//! the [`UrlOpener`] and reports `Message::DownloadFinished`. The returned
//! [`DownloadTask`] owns a `watch` shutdown sender and the `JoinHandle`:
//! cancelling (or dropping) it stops the task before it can report, so a
//! closed dialog never receives a completion.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::opener::UrlOpener;
use crate::message::Message;
use ftdm_core::{ActionOutcome, ActionTicket};
use tracing::{debug, error, info, warn};

/// Handle to one running download
#[derive(Debug)]
pub struct DownloadTask {
    ticket: ActionTicket,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl DownloadTask {
    pub fn ticket(&self) -> ActionTicket {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signal shutdown and abort the task
    pub fn cancel(self) {
        debug!("Cancelling download task {}", self.ticket);
        let _ = self.shutdown_tx.send(true);
        self.handle.abort();
    }
}

/// What the background task needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub ticket: ActionTicket,
    pub archive_url: String,
    pub delay: Duration,
    pub auto_close_delay: Option<Duration>,
}

/// Wait for `duration` unless shutdown is signalled first
///
/// Returns `false` when the task should stop.
async fn wait_unless_cancelled(duration: Duration, shutdown_rx: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => true,
        // A dropped sender counts as shutdown too
        _ = shutdown_rx.changed() => false,
    }
}

pub fn spawn_download(
    request: DownloadRequest,
    opener: Arc<dyn UrlOpener>,
    msg_tx: mpsc::Sender<Message>,
) -> DownloadTask {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let ticket = request.ticket;

    let handle = tokio::spawn(async move {
        if !wait_unless_cancelled(request.delay, &mut shutdown_rx).await {
            debug!("Download {} cancelled before it started", ticket);
            return;
        }

        let result: ActionOutcome = match opener.open(&request.archive_url) {
            Ok(()) => {
                info!("Download {} handed {} to the browser", ticket, request.archive_url);
                Ok(())
            }
            Err(e) => {
                if e.is_recoverable() {
                    warn!("Download {}: {}", ticket, e);
                } else {
                    error!("Download {}: {}", ticket, e);
                }
                Err(format!("Download failed. {e}"))
            }
        };

        if let (Ok(()), Some(delay)) = (&result, request.auto_close_delay) {
            if !wait_unless_cancelled(delay, &mut shutdown_rx).await {
                debug!("Download {} cancelled during auto-close delay", ticket);
                return;
            }
        }

        if msg_tx
            .send(Message::DownloadFinished { ticket, result })
            .await
            .is_err()
        {
            debug!("Download {} finished after the event loop stopped", ticket);
        }
    });

    DownloadTask {
        ticket,
        shutdown_tx,
        handle,
    }
}
