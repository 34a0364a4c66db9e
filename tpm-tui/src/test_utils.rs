//! 测试辅助模块

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tpm_api::{AccountApi, ApiError, ApiResponse, Endpoint, Payload, Result as ApiResult};
use tpm_core::{CoreError, DiagnosticSink};

use crate::backend::CoreService;
use crate::event::poll_submission;
use crate::message::AppMessage;
use crate::model::state::sign_up_fields;
use crate::model::App;

/// 总是返回同一个结果的远程客户端
pub struct StaticAccountApi {
    response: ApiResult<ApiResponse>,
    calls: AtomicUsize,
}

impl StaticAccountApi {
    pub fn new(response: ApiResult<ApiResponse>) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountApi for StaticAccountApi {
    async fn submit_account(&self, _endpoint: Endpoint, _payload: &Payload) -> ApiResult<ApiResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// 记录所有诊断输出
#[derive(Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<String>>,
}

impl RecordingDiagnostics {
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

pub fn complete_payload() -> Payload {
    [
        ("key", "2051052001"),
        ("email", "2051052001@ou.edu.vn"),
        ("password", "s3cret!"),
    ]
    .into_iter()
    .collect()
}

pub fn test_app(response: Result<ApiResponse, ApiError>) -> App {
    let api = Arc::new(StaticAccountApi::new(response));
    let backend = CoreService::with_api(api, sign_up_fields()).unwrap();
    App::new(backend)
}

pub fn test_app_with_diagnostics(
    response: Result<ApiResponse, ApiError>,
) -> (App, Arc<RecordingDiagnostics>) {
    let diagnostics = Arc::new(RecordingDiagnostics::default());
    let api = Arc::new(StaticAccountApi::new(response));
    let backend = CoreService::with_api(api, sign_up_fields())
        .unwrap()
        .with_diagnostics(diagnostics.clone());
    (App::new(backend), diagnostics)
}

/// 填入一份能通过校验的草稿
pub fn fill_valid_draft(app: &mut App) {
    let draft = app.sign_up.screen.draft_mut();
    draft.set("key", "2051052001");
    draft.set("email", "2051052001@ou.edu.vn");
    draft.set("password", "s3cret!");
    draft.set("confirm", "s3cret!");
}

/// 等待后台请求的结果
pub fn wait_for_message(app: &App) -> AppMessage {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(msg) = poll_submission(app) {
            return msg;
        }
        assert!(Instant::now() < deadline, "no submission outcome within 5s");
        std::thread::sleep(Duration::from_millis(5));
    }
}
