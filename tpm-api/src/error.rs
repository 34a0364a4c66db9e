use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level failures of the registration API.
///
/// An `ApiError` means no usable HTTP response was obtained. Any response the
/// server did send, whatever its status, comes back as an
/// [`ApiResponse`](crate::ApiResponse) and is interpreted by the caller.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The configured base URL and endpoint path do not form a valid URL.
    #[error("Invalid URL '{url}': {detail}")]
    InvalidUrl {
        /// The offending URL text.
        url: String,
        /// Parser error details.
        detail: String,
    },

    /// The response arrived but its body could not be read.
    #[error("Failed to read response body: {detail}")]
    BodyReadError {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// Whether the failure is transient (the same request may succeed later).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
