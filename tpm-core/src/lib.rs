//! TPM Sign-Up Core Library
//!
//! Client-side registration workflow for the TPM student client:
//! field validation, payload construction, the remote call and the
//! interpretation of its result into a UI state transition.
//!
//! The remote service sits behind [`AccountApi`]; unexpected failures are
//! handed to a [`DiagnosticSink`] and never shown to the user.

pub mod error;
pub mod screen;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use screen::SignUpScreen;
pub use services::{build_payload, first_failure, SignUpService};
pub use traits::{AccountApi, DiagnosticSink, LogDiagnostics};
