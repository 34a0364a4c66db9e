//! 提交结果类型

use serde::{Deserialize, Serialize};

/// Why local validation stopped a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationFailure {
    /// A required field is empty
    MissingField { field: String, message: String },
    /// Password and confirmation differ
    ConfirmationMismatch { field: String, message: String },
}

impl ValidationFailure {
    /// Message to show the user.
    pub fn message(&self) -> &str {
        match self {
            Self::MissingField { message, .. } | Self::ConfirmationMismatch { message, .. } => {
                message
            }
        }
    }

    /// Field the user should fix.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field, .. } | Self::ConfirmationMismatch { field, .. } => field,
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    /// Stopped before the network; message is field scoped
    ValidationFailed(String),
    /// Account created
    RemoteSuccess,
    /// Server refused the data; message is the server's `detail`
    RemoteRejected(String),
    /// Anything else; the cause is for operators only
    RemoteError(String),
}

impl SubmissionOutcome {
    /// Message the user gets to see, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed(msg) | Self::RemoteRejected(msg) => Some(msg),
            Self::RemoteSuccess | Self::RemoteError(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::RemoteSuccess)
    }

    /// Whether the remote service was contacted (successfully or not).
    pub fn reached_remote(&self) -> bool {
        !matches!(self, Self::ValidationFailed(_))
    }
}

impl From<ValidationFailure> for SubmissionOutcome {
    fn from(failure: ValidationFailure) -> Self {
        Self::ValidationFailed(failure.message().to_string())
    }
}

/// Choices offered by the post-registration confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationChoice {
    /// Go to the sign-in screen
    SignIn,
    /// Close the prompt and stay
    Dismiss,
}

/// Screen transition requested by the sign-up flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationRequest {
    SignIn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_and_rejection_reach_the_user() {
        assert_eq!(
            SubmissionOutcome::ValidationFailed("a".into()).user_message(),
            Some("a")
        );
        assert_eq!(
            SubmissionOutcome::RemoteRejected("b".into()).user_message(),
            Some("b")
        );
        assert_eq!(SubmissionOutcome::RemoteSuccess.user_message(), None);
        assert_eq!(
            SubmissionOutcome::RemoteError("socket closed".into()).user_message(),
            None
        );
    }

    #[test]
    fn validation_failure_converts_to_outcome() {
        let failure = ValidationFailure::ConfirmationMismatch {
            field: "confirm".into(),
            message: "Mật khẩu không khớp".into(),
        };
        assert_eq!(failure.field(), "confirm");
        let outcome: SubmissionOutcome = failure.into();
        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationFailed("Mật khẩu không khớp".into())
        );
        assert!(!outcome.reached_remote());
    }
}
