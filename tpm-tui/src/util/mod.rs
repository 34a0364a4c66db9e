//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志写入文件（终端被 TUI 占用）
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按显示宽度截断文本
//!
//!
//!     初始化终端：
//!         · enable_raw_mode()           按键立即生效，不回显
//!         · EnterAlternateScreen        在备用屏幕运行，退出后恢复原有内容
//!
//!     恢复终端：
//!         无论 app::run 成功与否都必须调用 restore_terminal，
//!         否则终端会停留在原始模式。
//!
//!     日志：
//!         TUI 占用了 stdout，日志写到 `<config_dir>/tpm/tpm-tui.log`。
//!         级别由 RUST_LOG 控制，默认 info；
//!         tpm-api / tpm-core 使用 `log` 门面，经 tracing-log 桥接后一并写入。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::tail_fit;
