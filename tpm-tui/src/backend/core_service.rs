//! 核心服务
//!
//! 封装 tpm-core 的注册服务，持有 tokio 运行时，
//! 把网络请求放到后台执行，结果通过 channel 交回主循环。

use std::sync::mpsc;
use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::{Builder, Runtime};
use tpm_api::{create_client, AccountApi, Payload};
use tpm_core::types::{FieldSet, SubmissionOutcome};
use tpm_core::{DiagnosticSink, LogDiagnostics, SignUpService};

use super::config_service::AppConfig;

/// TUI 核心服务
pub struct CoreService {
    runtime: Runtime,
    api: Arc<dyn AccountApi>,
    diagnostics: Arc<dyn DiagnosticSink>,
    sign_up: Arc<SignUpService>,
}

impl CoreService {
    /// 根据配置创建 HTTP 客户端和服务
    pub fn new(config: &AppConfig, fields: FieldSet) -> Result<Self> {
        let api = create_client(&config.api_base_url, config.request_timeout())?;
        log::info!("Using TPM API at {}", config.api_base_url);
        Self::with_api(api, fields)
    }

    /// 使用指定的远程客户端创建服务
    pub fn with_api(api: Arc<dyn AccountApi>, fields: FieldSet) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tpm-worker")
            .enable_all()
            .build()?;
        let diagnostics: Arc<dyn DiagnosticSink> = Arc::new(LogDiagnostics);
        let sign_up = Arc::new(
            SignUpService::new(Arc::clone(&api), fields).with_diagnostics(Arc::clone(&diagnostics)),
        );

        Ok(Self {
            runtime,
            api,
            diagnostics,
            sign_up,
        })
    }

    /// 替换诊断输出
    #[cfg(test)]
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        let fields = self.sign_up.fields().clone();
        self.rebuild(fields);
        self
    }

    pub fn sign_up(&self) -> &SignUpService {
        &self.sign_up
    }

    /// 语言切换后重建字段定义
    ///
    /// 已在后台执行的请求继续持有旧服务实例。
    pub fn set_fields(&mut self, fields: FieldSet) {
        self.rebuild(fields);
    }

    fn rebuild(&mut self, fields: FieldSet) {
        self.sign_up = Arc::new(
            SignUpService::new(Arc::clone(&self.api), fields)
                .with_diagnostics(Arc::clone(&self.diagnostics)),
        );
    }

    /// 在后台发送已校验的载荷
    ///
    /// 返回的 receiver 恰好收到一个结果；若任务异常退出，发送端被丢弃，
    /// 接收方会看到 `Disconnected`。
    pub fn spawn_submission(&self, payload: Payload) -> mpsc::Receiver<SubmissionOutcome> {
        let (tx, rx) = mpsc::channel();
        let service = Arc::clone(&self.sign_up);
        self.runtime.spawn(async move {
            let outcome = service.send(&payload).await;
            if tx.send(outcome).is_err() {
                log::debug!("Submission finished after the screen stopped listening");
            }
        });
        rx
    }
}
