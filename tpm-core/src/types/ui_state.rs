//! 注册界面状态机
//!
//! ```text
//!            validation failure (error shown, stays Idle)
//!              ┌──────┐
//!              ▼      │
//!   Idle ──submit──▶ Busy ──201──────────▶ Success ──choice──▶ Idle
//!    ▲                 │
//!    │                 └──400 / other────▶ Failed ──submit──▶ Busy
//!    └──── guard dropped while Busy ──────┘
//! ```

use serde::{Deserialize, Serialize};

use super::SubmissionOutcome;

/// Where the screen is in the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// A request is in flight
    Busy,
    /// Account created, confirmation prompt open
    Success,
    /// Last attempt rejected or failed
    Failed,
}

/// Screen-owned view state, mutated only by the submission flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    phase: SubmissionPhase,
    error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn busy(&self) -> bool {
        self.phase == SubmissionPhase::Busy
    }

    /// True iff there is a non-empty message and no success since it was set.
    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }

    /// Current error text, empty when none.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }

    /// Whether the confirmation prompt is open.
    pub fn awaiting_confirmation(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    /// Whether a new attempt may start (the UI uses this to disable submit).
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Failed)
    }

    fn set_error(&mut self, message: &str) {
        self.error = if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        };
    }

    /// Show a local validation message without ever entering `Busy`.
    pub fn show_validation_error(&mut self, message: &str) {
        self.set_error(message);
        self.phase = SubmissionPhase::Idle;
    }

    /// Clear the previous error and mark the screen busy.
    ///
    /// Callers that cannot hold a [`BusyGuard`] across the request (the TUI
    /// hands the request to a worker) must follow up with [`UiState::apply`].
    pub fn enter_busy(&mut self) {
        self.error = None;
        self.phase = SubmissionPhase::Busy;
    }

    /// Enter `Busy` for the lifetime of the returned guard.
    pub fn begin(&mut self) -> BusyGuard<'_> {
        self.enter_busy();
        BusyGuard { ui: self }
    }

    /// Apply the outcome of an attempt. Busy is always left.
    pub fn apply(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::ValidationFailed(message) => self.show_validation_error(message),
            SubmissionOutcome::RemoteSuccess => {
                self.error = None;
                self.phase = SubmissionPhase::Success;
            }
            SubmissionOutcome::RemoteRejected(message) => {
                self.set_error(message);
                self.phase = SubmissionPhase::Failed;
            }
            SubmissionOutcome::RemoteError(_) => {
                self.phase = SubmissionPhase::Failed;
            }
        }
    }

    /// Close the confirmation prompt.
    pub fn close_confirmation(&mut self) {
        if self.phase == SubmissionPhase::Success {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Back to a fresh screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Holds a [`UiState`] in `Busy` until [`finish`](BusyGuard::finish) or drop.
///
/// Dropping the guard without finishing (a cancelled future, a panic while
/// awaiting the remote call) still releases busy.
#[must_use = "dropping the guard immediately releases busy"]
pub struct BusyGuard<'a> {
    ui: &'a mut UiState,
}

impl BusyGuard<'_> {
    pub fn ui(&self) -> &UiState {
        self.ui
    }

    /// Apply the outcome and release busy.
    pub fn finish(self, outcome: &SubmissionOutcome) {
        self.ui.apply(outcome);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.ui.phase == SubmissionPhase::Busy {
            log::warn!("Submission ended without an outcome, releasing busy state");
            self.ui.phase = SubmissionPhase::Idle;
        }
    }
}
