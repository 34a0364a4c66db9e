//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event 与 Update 之间的桥梁。
//! 键盘输入和后台请求的结果都被翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod modal;          // 弹窗子消息
//!         mod sign_up;        // 注册页子消息（含后台结果）
//!

mod app;
mod modal;
mod sign_up;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use sign_up::SignUpMessage;
