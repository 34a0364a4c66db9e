//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use tpm_api::ApiError;

/// Core layer error type
///
/// Only unexpected failures end up here. Validation failures and server-side
/// rejections are ordinary outcomes of a submission, see
/// [`SubmissionOutcome`](crate::types::SubmissionOutcome).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The server answered with a status the sign-up flow does not handle
    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// A recognized status arrived without the expected body
    #[error("Malformed response from {endpoint} (status {status}): {reason}")]
    MalformedResponse {
        endpoint: String,
        status: u16,
        reason: String,
    },

    /// The background submission ended without reporting an outcome
    #[error("Submission worker stopped before reporting an outcome")]
    WorkerGone,

    /// Transport error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            // the user may simply be offline
            Self::Api(e) => e.is_retryable(),
            Self::UnexpectedStatus { .. } | Self::MalformedResponse { .. } | Self::WorkerGone => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unexpected_status() {
        let e = CoreError::UnexpectedStatus {
            endpoint: "student-register".to_string(),
            status: 500,
        };
        assert_eq!(e.to_string(), "Unexpected status 500 from student-register");
    }

    #[test]
    fn api_error_passes_through() {
        let e: CoreError = ApiError::NetworkError {
            detail: "connection refused".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "Network error: connection refused");
        assert!(e.is_expected());
    }

    #[test]
    fn malformed_response_is_not_expected() {
        let e = CoreError::MalformedResponse {
            endpoint: "student-register".to_string(),
            status: 400,
            reason: "missing detail".to_string(),
        };
        assert!(!e.is_expected());
    }
}
