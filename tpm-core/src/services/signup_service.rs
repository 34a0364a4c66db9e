//! 注册提交服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountApi, DiagnosticSink, LogDiagnostics};
use crate::types::{
    AccountDraft, ApiResponse, Endpoint, FieldSet, Payload, SubmissionOutcome, UiState,
    ValidationFailure,
};

use super::{build_payload, first_failure};

/// Drives one sign-up attempt: validate, build, send, interpret.
pub struct SignUpService {
    api: Arc<dyn AccountApi>,
    fields: FieldSet,
    diagnostics: Arc<dyn DiagnosticSink>,
    endpoint: Endpoint,
}

impl SignUpService {
    /// 创建服务实例，诊断信息默认写入 `log`
    #[must_use]
    pub fn new(api: Arc<dyn AccountApi>, fields: FieldSet) -> Self {
        Self {
            api,
            fields,
            diagnostics: Arc::new(LogDiagnostics),
            endpoint: Endpoint::StudentRegister,
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Validate the draft and build its payload.
    pub fn prepare(&self, draft: &AccountDraft) -> Result<Payload, ValidationFailure> {
        match first_failure(draft, &self.fields) {
            Some(failure) => {
                log::debug!("Sign-up halted on field '{}'", failure.field());
                Err(failure)
            }
            None => Ok(build_payload(draft, &self.fields)),
        }
    }

    /// Send a prepared payload and interpret the answer.
    ///
    /// Never fails: every error becomes a [`SubmissionOutcome`]. Unexpected
    /// failures are reported to the diagnostic sink first.
    pub async fn send(&self, payload: &Payload) -> SubmissionOutcome {
        let result = self
            .api
            .submit_account(self.endpoint, payload)
            .await
            .map_err(CoreError::from)
            .and_then(|response| self.interpret(&response));

        match result {
            Ok(outcome) => outcome,
            Err(e) => self.report_unexpected(e),
        }
    }

    /// Full guarded flow against a caller-owned [`UiState`].
    ///
    /// A validation failure never touches busy. Otherwise busy is held for
    /// the duration of the remote call and released on every exit path,
    /// including when this future is dropped before completion.
    pub async fn submit(&self, draft: &AccountDraft, ui: &mut UiState) -> SubmissionOutcome {
        let payload = match self.prepare(draft) {
            Ok(payload) => payload,
            Err(failure) => {
                let outcome = SubmissionOutcome::from(failure);
                ui.apply(&outcome);
                return outcome;
            }
        };

        let guard = ui.begin();
        let outcome = self.send(&payload).await;
        guard.finish(&outcome);
        outcome
    }

    /// Report a failure that happened outside this service (e.g. a worker
    /// that vanished) and turn it into an outcome.
    pub fn report_unexpected(&self, error: CoreError) -> SubmissionOutcome {
        self.diagnostics.report(self.endpoint.key(), &error);
        SubmissionOutcome::RemoteError(error.to_string())
    }

    fn interpret(&self, response: &ApiResponse) -> CoreResult<SubmissionOutcome> {
        if response.is_created() {
            log::info!("Account registered via {}", self.endpoint);
            return Ok(SubmissionOutcome::RemoteSuccess);
        }

        if response.is_bad_request() {
            return match response.detail().filter(|d| !d.is_empty()) {
                Some(detail) => {
                    log::warn!("Registration rejected by server: {detail}");
                    Ok(SubmissionOutcome::RemoteRejected(detail))
                }
                None => Err(CoreError::MalformedResponse {
                    endpoint: self.endpoint.key().to_string(),
                    status: response.status,
                    reason: "missing detail".to_string(),
                }),
            };
        }

        Err(CoreError::UnexpectedStatus {
            endpoint: self.endpoint.key().to_string(),
            status: response.status,
        })
    }
}
