//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tpm_api::{ApiError, Result as ApiResult};

use crate::error::CoreError;
use crate::services::SignUpService;
use crate::traits::{AccountApi, DiagnosticSink};
use crate::types::{
    AccountDraft, ApiResponse, ConfirmationRule, Endpoint, FieldDefinition, FieldSet, Payload,
};

// ===== MockAccountApi =====

pub struct MockAccountApi {
    calls: RwLock<Vec<(Endpoint, Payload)>>,
    /// 按顺序消费的响应，耗尽后使用 `fallback`
    queued: RwLock<VecDeque<ApiResult<ApiResponse>>>,
    fallback: ApiResult<ApiResponse>,
    /// 如果为 true，请求永不返回（用于测试取消路径）
    hang: bool,
}

impl MockAccountApi {
    /// Answers every call with `201 Created`.
    pub fn new() -> Self {
        Self::responding(Ok(ApiResponse::new(201, None)))
    }

    pub fn responding(fallback: ApiResult<ApiResponse>) -> Self {
        Self {
            calls: RwLock::new(Vec::new()),
            queued: RwLock::new(VecDeque::new()),
            fallback,
            hang: false,
        }
    }

    /// Records the call, then never answers.
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::new()
        }
    }

    pub async fn push_response(&self, response: ApiResult<ApiResponse>) {
        self.queued.write().await.push_back(response);
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    pub async fn last_call(&self) -> Option<(Endpoint, Payload)> {
        self.calls.read().await.last().cloned()
    }
}

#[async_trait]
impl AccountApi for MockAccountApi {
    async fn submit_account(&self, endpoint: Endpoint, payload: &Payload) -> ApiResult<ApiResponse> {
        self.calls.write().await.push((endpoint, payload.clone()));
        if self.hang {
            std::future::pending::<()>().await;
        }
        match self.queued.write().await.pop_front() {
            Some(response) => response,
            None => self.fallback.clone(),
        }
    }
}

// ===== RecordingDiagnostics =====

pub struct RecordingDiagnostics {
    reports: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report(&self, context: &str, error: &CoreError) {
        self.reports
            .lock()
            .unwrap()
            .push(format!("[{context}] {error}"));
    }
}

// ===== Fixtures =====

/// The student registration fields: key, email, password, confirm.
pub fn student_fields() -> FieldSet {
    FieldSet::new(
        vec![
            FieldDefinition::new("key", "Vui lòng nhập mã số sinh viên"),
            FieldDefinition::new("email", "Vui lòng nhập email"),
            FieldDefinition::new("password", "Vui lòng nhập mật khẩu").secret(),
            FieldDefinition::new("confirm", "Vui lòng xác nhận mật khẩu").secret(),
        ],
        ConfirmationRule::new("confirm", "password", "Mật khẩu không khớp"),
    )
}

pub fn complete_draft() -> AccountDraft {
    [
        ("key", "2051052001"),
        ("email", "2051052001@ou.edu.vn"),
        ("password", "s3cret!"),
        ("confirm", "s3cret!"),
    ]
    .into_iter()
    .collect()
}

/// 创建测试用 `SignUpService`，返回 (service, api, diagnostics)
pub fn create_test_service(
    response: Result<ApiResponse, ApiError>,
) -> (
    SignUpService,
    Arc<MockAccountApi>,
    Arc<RecordingDiagnostics>,
) {
    let api = Arc::new(MockAccountApi::responding(response));
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let svc = SignUpService::new(api.clone(), student_fields()).with_diagnostics(diagnostics.clone());
    (svc, api, diagnostics)
}
