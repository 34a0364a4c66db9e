//! Seams the platform layer plugs into

mod diagnostic_sink;

pub use diagnostic_sink::{DiagnosticSink, LogDiagnostics};

// Remote client capability lives in the api crate
pub use tpm_api::AccountApi;
