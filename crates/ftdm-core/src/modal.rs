//! Download dialog state machine
//!
//! ```text
//! Closed ──open()──▶ Open(idle) ──start_action()──▶ Open(busy)
//!   ▲                    │  ▲                          │
//!   └──────close()───────┘  └───────complete()─────────┘
//! ```
//!
//! `close()` is valid from any open state and force-resets the busy flag. The
//! in-flight [`ActionTicket`] is handed back so the owner can cancel the task
//! that was driving it; a late completion for that ticket is ignored.

use std::fmt;

use serde::Serialize;

/// Message shown when the access code does not match
pub const WRONG_CODE_MESSAGE: &str = "Incorrect password. Please try again.";

/// Outcome reported by whatever performed the action
pub type ActionOutcome = std::result::Result<(), String>;

/// Identifies one run of the dialog's action
///
/// Tickets are unique for the lifetime of a [`DownloadModal`], so a completion
/// that arrives after the dialog was closed (or reopened) can be told apart
/// from the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActionTicket(u64);

impl ActionTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Behavioural switches for the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalPolicy {
    /// Gate the action behind an access code
    pub require_auth: bool,
    /// Code accepted by the gate. With no code configured the gate is disabled.
    pub access_code: Option<String>,
    /// Close the dialog once the action succeeds
    pub auto_close_on_success: bool,
    /// Keep the failure message around for display
    pub show_errors: bool,
}

impl Default for ModalPolicy {
    fn default() -> Self {
        Self {
            require_auth: false,
            access_code: None,
            auto_close_on_success: false,
            show_errors: true,
        }
    }
}

impl ModalPolicy {
    fn gate_enabled(&self) -> bool {
        self.require_auth && self.access_code.is_some()
    }
}

/// Access-code gate state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthGate {
    #[default]
    Open,
    Locked {
        input: String,
        reveal: bool,
        error: Option<String>,
    },
}

impl AuthGate {
    fn locked() -> Self {
        AuthGate::Locked {
            input: String::new(),
            reveal: false,
            error: None,
        }
    }
}

/// What [`DownloadModal::complete`] did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The ticket was stale (dialog closed, or a different run is current)
    Ignored,
    /// Success; dialog stays open and idle
    Idle,
    /// Success; dialog closed under `auto_close_on_success`
    Closed,
    /// Failure; dialog stays open and idle so the user can retry
    Failed,
}

/// Framework download dialog
#[derive(Debug, Clone)]
pub struct DownloadModal {
    policy: ModalPolicy,
    is_open: bool,
    busy: Option<ActionTicket>,
    gate: AuthGate,
    error: Option<String>,
    next_ticket: u64,
}

impl Default for DownloadModal {
    fn default() -> Self {
        Self::new(ModalPolicy::default())
    }
}

impl DownloadModal {
    pub fn new(policy: ModalPolicy) -> Self {
        Self {
            policy,
            is_open: false,
            busy: None,
            gate: AuthGate::Open,
            error: None,
            next_ticket: 0,
        }
    }

    pub fn policy(&self) -> &ModalPolicy {
        &self.policy
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn busy_ticket(&self) -> Option<ActionTicket> {
        self.busy
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.gate, AuthGate::Locked { .. })
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show the dialog in its idle state. No-op when already open.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.busy = None;
        self.error = None;
        self.gate = if self.policy.gate_enabled() {
            AuthGate::locked()
        } else {
            AuthGate::Open
        };
    }

    /// Hide the dialog, dropping any transient input
    ///
    /// Returns the ticket of the action that was in flight, if any, so the
    /// caller can cancel it.
    pub fn close(&mut self) -> Option<ActionTicket> {
        self.is_open = false;
        self.error = None;
        self.gate = AuthGate::Open;
        self.busy.take()
    }

    /// Begin the dialog's action
    ///
    /// Returns `None` without changing state when the dialog is closed, still
    /// locked, or already busy.
    pub fn start_action(&mut self) -> Option<ActionTicket> {
        if !self.is_open || self.is_busy() || self.is_locked() {
            return None;
        }
        self.next_ticket += 1;
        let ticket = ActionTicket(self.next_ticket);
        self.busy = Some(ticket);
        self.error = None;
        Some(ticket)
    }

    /// Record the result of the action identified by `ticket`
    pub fn complete(&mut self, ticket: ActionTicket, outcome: ActionOutcome) -> Completion {
        if !self.is_open || self.busy != Some(ticket) {
            return Completion::Ignored;
        }
        self.busy = None;

        match outcome {
            Ok(()) if self.policy.auto_close_on_success => {
                self.close();
                Completion::Closed
            }
            Ok(()) => Completion::Idle,
            Err(message) => {
                if self.policy.show_errors {
                    self.error = Some(message);
                }
                Completion::Failed
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Access code input
    // ─────────────────────────────────────────────────────────

    pub fn push_code_char(&mut self, c: char) {
        if let AuthGate::Locked { input, error, .. } = &mut self.gate {
            input.push(c);
            *error = None;
        }
    }

    pub fn pop_code_char(&mut self) {
        if let AuthGate::Locked { input, .. } = &mut self.gate {
            input.pop();
        }
    }

    /// Replace the typed code wholesale, as a text field reports it
    pub fn set_code(&mut self, value: &str) {
        if let AuthGate::Locked { input, error, .. } = &mut self.gate {
            if input != value {
                *input = value.to_string();
                *error = None;
            }
        }
    }

    pub fn toggle_reveal(&mut self) {
        if let AuthGate::Locked { reveal, .. } = &mut self.gate {
            *reveal = !*reveal;
        }
    }

    /// Check the typed code. Unlocks on a match, otherwise clears the input
    /// and records an error. Returns whether the gate is now open.
    pub fn submit_code(&mut self) -> bool {
        let AuthGate::Locked { input, error, .. } = &mut self.gate else {
            return true;
        };

        if self.policy.access_code.as_deref() == Some(input.as_str()) {
            self.gate = AuthGate::Open;
            true
        } else {
            input.clear();
            *error = Some(WRONG_CODE_MESSAGE.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated() -> DownloadModal {
        DownloadModal::new(ModalPolicy {
            require_auth: true,
            access_code: Some("open-sesame".into()),
            ..ModalPolicy::default()
        })
    }

    fn type_code(modal: &mut DownloadModal, code: &str) {
        for c in code.chars() {
            modal.push_code_char(c);
        }
    }

    #[test]
    fn test_initial_state_is_closed_and_idle() {
        let modal = DownloadModal::default();
        assert!(!modal.is_open());
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_open_then_close_leaves_idle() {
        let mut modal = DownloadModal::default();
        modal.open();
        assert!(modal.is_open());
        assert!(!modal.is_busy());

        assert_eq!(modal.close(), None);
        assert!(!modal.is_open());
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_success_path_stays_open() {
        let mut modal = DownloadModal::default();
        modal.open();

        let ticket = modal.start_action().unwrap();
        assert!(modal.is_open());
        assert!(modal.is_busy());

        assert_eq!(modal.complete(ticket, Ok(())), Completion::Idle);
        assert!(modal.is_open());
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_failure_resets_busy_and_keeps_dialog_open() {
        let mut modal = DownloadModal::default();
        modal.open();
        let ticket = modal.start_action().unwrap();

        let done = modal.complete(ticket, Err("Download failed. Please try again.".into()));
        assert_eq!(done, Completion::Failed);
        assert!(modal.is_open());
        assert!(!modal.is_busy());
        assert_eq!(modal.error(), Some("Download failed. Please try again."));

        // retry is possible and clears the old error
        assert!(modal.start_action().is_some());
        assert_eq!(modal.error(), None);
    }

    #[test]
    fn test_errors_hidden_when_policy_says_so() {
        let mut modal = DownloadModal::new(ModalPolicy {
            show_errors: false,
            ..ModalPolicy::default()
        });
        modal.open();
        let ticket = modal.start_action().unwrap();
        modal.complete(ticket, Err("nope".into()));
        assert_eq!(modal.error(), None);
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_start_while_busy_is_noop() {
        let mut modal = DownloadModal::default();
        modal.open();
        let first = modal.start_action().unwrap();
        assert_eq!(modal.start_action(), None);
        assert_eq!(modal.busy_ticket(), Some(first));

        // exactly one completion is honoured
        assert_eq!(modal.complete(first, Ok(())), Completion::Idle);
        assert_eq!(modal.complete(first, Ok(())), Completion::Ignored);
    }

    #[test]
    fn test_start_while_closed_is_noop() {
        let mut modal = DownloadModal::default();
        assert_eq!(modal.start_action(), None);
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_close_while_busy_returns_ticket_and_ignores_late_result() {
        let mut modal = DownloadModal::default();
        modal.open();
        let ticket = modal.start_action().unwrap();

        assert_eq!(modal.close(), Some(ticket));
        assert!(!modal.is_busy());
        assert_eq!(modal.complete(ticket, Ok(())), Completion::Ignored);

        // a reopened dialog does not accept the old ticket either
        modal.open();
        assert_eq!(modal.complete(ticket, Ok(())), Completion::Ignored);
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_tickets_are_unique() {
        let mut modal = DownloadModal::default();
        modal.open();
        let a = modal.start_action().unwrap();
        modal.complete(a, Ok(()));
        let b = modal.start_action().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_auto_close_on_success() {
        let mut modal = DownloadModal::new(ModalPolicy {
            auto_close_on_success: true,
            ..ModalPolicy::default()
        });
        modal.open();
        let ticket = modal.start_action().unwrap();
        assert_eq!(modal.complete(ticket, Ok(())), Completion::Closed);
        assert!(!modal.is_open());
        assert!(!modal.is_busy());
    }

    #[test]
    fn test_busy_implies_open() {
        let mut modal = DownloadModal::default();
        modal.open();
        modal.start_action();
        modal.close();
        assert!(!(modal.is_busy() && !modal.is_open()));
    }

    #[test]
    fn test_gate_blocks_action_until_code_matches() {
        let mut modal = gated();
        modal.open();
        assert!(modal.is_locked());
        assert_eq!(modal.start_action(), None);

        type_code(&mut modal, "wrong");
        assert!(!modal.submit_code());
        match modal.gate() {
            AuthGate::Locked { input, error, .. } => {
                assert!(input.is_empty());
                assert_eq!(error.as_deref(), Some(WRONG_CODE_MESSAGE));
            }
            AuthGate::Open => panic!("gate should still be locked"),
        }

        type_code(&mut modal, "open-sesame");
        assert!(modal.submit_code());
        assert!(!modal.is_locked());
        assert!(modal.start_action().is_some());
    }

    #[test]
    fn test_close_clears_code_and_relocks_on_open() {
        let mut modal = gated();
        modal.open();
        type_code(&mut modal, "open-");
        modal.toggle_reveal();
        modal.close();

        modal.open();
        assert_eq!(
            modal.gate(),
            &AuthGate::Locked {
                input: String::new(),
                reveal: false,
                error: None
            }
        );
    }

    #[test]
    fn test_backspace_edits_code() {
        let mut modal = gated();
        modal.open();
        type_code(&mut modal, "abc");
        modal.pop_code_char();
        match modal.gate() {
            AuthGate::Locked { input, .. } => assert_eq!(input, "ab"),
            AuthGate::Open => panic!("expected locked gate"),
        }
    }

    #[test]
    fn test_require_auth_without_code_is_open() {
        let mut modal = DownloadModal::new(ModalPolicy {
            require_auth: true,
            access_code: None,
            ..ModalPolicy::default()
        });
        modal.open();
        assert!(!modal.is_locked());
        assert!(modal.start_action().is_some());
    }

    #[test]
    fn test_set_code_replaces_input_and_clears_error() {
        let mut modal = gated();
        modal.open();
        type_code(&mut modal, "wrong");
        assert!(!modal.submit_code());

        modal.set_code("open-sesame");
        assert!(matches!(
            modal.gate(),
            AuthGate::Locked { input, error: None, .. } if input == "open-sesame"
        ));
        assert!(modal.submit_code());

        // No-op once the gate is open
        modal.set_code("ignored");
        assert!(!modal.is_locked());
    }
}
