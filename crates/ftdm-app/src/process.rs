//! Message processing
//!
//! Runs a message through the TEA update loop, following chained messages,
//! and dispatches every resulting action.

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, ctx: &ActionContext) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx, &mut state.download_task);
        }

        msg = result.message;
    }
}

/// Cancel anything still running; called once the event loop exits
pub fn shutdown(state: &mut AppState) {
    if let Some(task) = state.download_task.take() {
        task.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::actions::MockUrlOpener;
    use crate::input_key::InputKey;
    use crate::state::UiMode;
    use tokio::sync::mpsc;

    fn context(expected_opens: usize) -> (ActionContext, mpsc::Receiver<Message>) {
        let mut opener = MockUrlOpener::new();
        opener
            .expect_open()
            .times(expected_opens)
            .returning(|_| Ok(()));
        let (tx, rx) = mpsc::channel(16);
        (ActionContext::new(tx, Arc::new(opener)), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_download_round_trip_through_event_loop() {
        let (ctx, mut rx) = context(1);
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::Char('d')), &ctx);
        assert_eq!(state.ui_mode, UiMode::DownloadDialog);

        process_message(&mut state, Message::Key(InputKey::Enter), &ctx);
        assert!(state.download.is_busy());
        assert!(state.download_task.is_some());

        // Re-entrant start while busy does nothing
        process_message(&mut state, Message::Key(InputKey::Enter), &ctx);

        let finished = rx.recv().await.unwrap();
        process_message(&mut state, finished, &ctx);

        assert!(state.download.is_open());
        assert!(!state.download.is_busy());
        assert!(state.download_task.is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err(), "only one completion expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_dialog_cancels_download() {
        let (ctx, mut rx) = context(0);
        let mut state = AppState::new();

        process_message(&mut state, Message::OpenDownload, &ctx);
        process_message(&mut state, Message::StartDownload, &ctx);
        assert!(state.download_task.is_some());

        process_message(&mut state, Message::Key(InputKey::Esc), &ctx);
        assert!(!state.download.is_open());
        assert!(!state.download.is_busy());
        assert!(state.download_task.is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_cancels_download() {
        let (ctx, mut rx) = context(0);
        let mut state = AppState::new();

        process_message(&mut state, Message::OpenDownload, &ctx);
        process_message(&mut state, Message::StartDownload, &ctx);
        process_message(&mut state, Message::Key(InputKey::CharCtrl('c')), &ctx);

        assert!(state.should_quit());
        assert!(state.download_task.is_none());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_leftover_task() {
        let (ctx, mut rx) = context(0);
        let mut state = AppState::new();

        process_message(&mut state, Message::OpenDownload, &ctx);
        process_message(&mut state, Message::StartDownload, &ctx);
        shutdown(&mut state);

        assert!(state.download_task.is_none());
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
}
