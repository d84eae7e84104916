//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use ftdm_core::{ActionOutcome, ActionTicket, Page};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit, cancelling any in-flight download
    Quit,

    // ─────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────
    NextPage,
    PreviousPage,
    GoToPage(Page),

    // ─────────────────────────────────────────────────────────
    // Accordion Cursor
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,

    /// Toggle the record under the cursor
    ToggleSelected,

    /// Collapse every accordion on the current page
    CollapseAll,

    // ─────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────
    ToggleSidebar,
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Download Dialog
    // ─────────────────────────────────────────────────────────
    OpenDownload,
    CloseDownload,
    StartDownload,

    /// Open the repository page in the browser (never busy)
    OpenRepository,

    /// Background download task finished
    DownloadFinished {
        ticket: ActionTicket,
        result: ActionOutcome,
    },

    /// Launching a link outside the download flow failed
    UrlOpenFailed {
        url: String,
        reason: String,
    },

    // Access code gate
    CodeInput(char),
    CodeBackspace,
    SubmitCode,
    ToggleCodeReveal,

    // Framework file tree preview
    TreeUp,
    TreeDown,
    TreeToggle,
}
