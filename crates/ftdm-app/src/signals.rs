//! Quit on OS signals
//!
//! Ctrl+C in raw mode arrives as a key event, so this only matters for
//! signals sent from outside: `kill`, a closed terminal, a supervisor.

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use ftdm_core::prelude::*;

/// Signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        })
    }
}

/// Forward the first shutdown signal to the event loop as [`Message::Quit`]
///
/// The returned handle can be aborted once the loop has exited.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(signal) => {
                info!("{} received, quitting", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone, {} ignored", signal);
                }
            }
            Err(e) => warn!("Signals will not be handled: {}", e),
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: ShutdownSignal| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut terminate = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
    let mut hangup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    })
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
        assert_eq!(ShutdownSignal::Hangup.to_string(), "SIGHUP");
    }
}
