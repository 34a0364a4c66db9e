//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦：
//!     - core_service      封装 tpm-core 的注册服务，在 tokio 运行时中执行网络请求
//!     - config_service    读取/保存 `<config_dir>/tpm/config.json`
//!
//! 数据流：
//!     用户在注册页按下提交
//!         ↓
//!     Update 层调用 SignUpScreen::begin_submission（本地校验 + 构建载荷）
//!         ↓
//!     CoreService::spawn_submission 在后台发送请求
//!         ↓
//!     主循环轮询 channel，得到 SubmissionOutcome
//!         ↓
//!     Update 层调用 SignUpScreen::complete 更新界面状态

mod config_service;
mod core_service;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
