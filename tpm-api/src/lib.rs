//! # tpm-api
//!
//! Remote client for the TPM (student training-point management) REST
//! service, limited to what the sign-up flow needs: submitting a new
//! student account.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tpm_api::{create_client, AccountApi, Endpoint, Payload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_client("http://127.0.0.1:8000", None)?;
//!
//!     let payload: Payload = [
//!         ("key", "2051052001"),
//!         ("email", "2051052001@ou.edu.vn"),
//!         ("password", "s3cret"),
//!     ]
//!     .into_iter()
//!     .collect();
//!
//!     let response = api.submit_account(Endpoint::StudentRegister, &payload).await?;
//!     if response.is_created() {
//!         println!("registered");
//!     } else if let Some(detail) = response.detail() {
//!         println!("rejected: {detail}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`AccountApi::submit_account`] only fails when no response was obtained
//! ([`ApiError`]). Every HTTP status, including 4xx/5xx, is returned as an
//! [`ApiResponse`] for the caller to interpret.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the HTTP implementation and its factory
pub use client::{HttpAccountApi, create_client};

// Re-export core trait
pub use traits::AccountApi;

// Re-export types
pub use types::{ApiResponse, Endpoint, Payload, status_code};

// Re-export utils module
pub use utils::log_sanitizer;
