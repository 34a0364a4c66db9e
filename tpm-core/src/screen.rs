//! 注册界面模型
//!
//! [`SignUpScreen`] owns exactly one [`AccountDraft`] and one [`UiState`]. Front
//! ends either await [`SignUpScreen::submit`] directly, or split the attempt
//! with [`SignUpScreen::begin_submission`] and [`SignUpScreen::complete`] when
//! the network call runs elsewhere.

use crate::services::SignUpService;
use crate::types::{
    AccountDraft, ConfirmationChoice, NavigationRequest, Payload, SubmissionOutcome, UiState,
    ValidationFailure,
};

#[derive(Debug, Clone, Default)]
pub struct SignUpScreen {
    draft: AccountDraft,
    ui: UiState,
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &AccountDraft {
        &self.draft
    }

    /// Mutable access for text input. The error stays visible while typing.
    pub fn draft_mut(&mut self) -> &mut AccountDraft {
        &mut self.draft
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Run one attempt to completion.
    pub async fn submit(&mut self, service: &SignUpService) -> SubmissionOutcome {
        let outcome = service.submit(&self.draft, &mut self.ui).await;
        self.discard_draft_on_success(&outcome);
        outcome
    }

    /// First half of a split attempt.
    ///
    /// On success the screen is busy and the payload must be sent by the
    /// caller, which then reports back through [`complete`](Self::complete).
    /// On failure the validation message is already shown.
    pub fn begin_submission(
        &mut self,
        service: &SignUpService,
    ) -> Result<Payload, ValidationFailure> {
        match service.prepare(&self.draft) {
            Ok(payload) => {
                self.ui.enter_busy();
                Ok(payload)
            }
            Err(failure) => {
                self.ui.show_validation_error(failure.message());
                Err(failure)
            }
        }
    }

    /// Second half of a split attempt.
    pub fn complete(&mut self, outcome: &SubmissionOutcome) {
        self.ui.apply(outcome);
        self.discard_draft_on_success(outcome);
    }

    /// Resolve the post-registration prompt.
    ///
    /// Returns `None` when no prompt is open or the user dismissed it.
    pub fn choose(&mut self, choice: ConfirmationChoice) -> Option<NavigationRequest> {
        if !self.ui.awaiting_confirmation() {
            return None;
        }
        self.ui.close_confirmation();
        match choice {
            ConfirmationChoice::SignIn => Some(NavigationRequest::SignIn),
            ConfirmationChoice::Dismiss => None,
        }
    }

    /// Drop the draft and any message (screen exit).
    pub fn reset(&mut self) {
        self.draft.clear();
        self.ui.reset();
    }

    fn discard_draft_on_success(&mut self, outcome: &SubmissionOutcome) {
        if outcome.is_success() {
            self.draft.clear();
        }
    }
}
