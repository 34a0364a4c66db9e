use crate::error::CoreError;

/// 运维诊断通道
///
/// Receives every unexpected submission failure. The user never sees these;
/// they are for whoever operates the client.
pub trait DiagnosticSink: Send + Sync {
    /// Report one unexpected failure.
    ///
    /// # Arguments
    /// * `context` - which operation failed (e.g. the endpoint key)
    /// * `error` - the failure
    fn report(&self, context: &str, error: &CoreError);
}

/// Default sink: forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&self, context: &str, error: &CoreError) {
        if error.is_expected() {
            log::warn!("[{context}] {error}");
        } else {
            log::error!("[{context}] {error}");
        }
    }
}
