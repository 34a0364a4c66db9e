//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入和后台请求结果转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     其中有：
//!         · poll_event        键盘事件轮询，最长等待 timeout
//!         · poll_submission   后台请求结果轮询，不阻塞
//!         · handle_event      事件分发：
//!             - 有弹窗打开时，交给 handle_modal_keys
//!             - 全局快捷键（Ctrl+C、Alt+Q、Alt+H、Alt+G、Alt+T）就地处理
//!             - 其余按当前页面分发
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event, poll_submission};
