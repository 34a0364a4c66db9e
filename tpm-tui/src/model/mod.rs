//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod page;           // 页面路由状态（SignUp / SignIn）
//!         pub mod state;      // 页面数据状态（注册表单、弹窗）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 注册页面状态（SignUpState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     SignUpState {
//!         screen: SignUpScreen,       // tpm-core：草稿 + UiState（忙碌 / 错误）
//!         focus: usize,               // 当前输入框，最后一位是提交按钮
//!         show_secrets: bool,         // 密码是否明文显示
//!         pending: Option<Receiver>,  // 在途请求的结果通道
//!     }
//!
//!     数据流：
//!         用户按 Enter（提交按钮上）
//!             ↓
//!         update/sign_up.rs 调用 screen.begin_submission()
//!             ↓ 校验失败：错误信息写入 UiState，焦点移到出错字段
//!             ↓ 校验通过：UiState 进入 Busy，backend 在后台发送请求
//!         主循环轮询 pending，收到 SubmissionOutcome
//!             ↓
//!         screen.complete(outcome)，成功时弹出确认弹窗
//!

mod app;
mod page;
pub mod state;

pub use app::App;
pub use page::Page;
pub use state::{Modal, ModalState, SignUpState};
