//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 页面 + 状态栏 + 弹窗
//!         mod components;         // 状态栏、弹窗
//!         mod pages;              // 注册页、登录页
//!         pub mod theme;          // 主题颜色和命名样式
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ TPM - Điểm rèn luyện sinh viên · Đăng ký     │  标题栏
//!     ├──────────────────────────────────────────────┤
//!     │                 Đăng ký                      │
//!     │   ┌ Mã số sinh viên ─────────────────────┐   │
//!     │   │ 2051052001▎                          │   │  页面
//!     │   └──────────────────────────────────────┘   │
//!     │                  ...                         │
//!     │   Đã có tài khoản? Đăng nhập                 │
//!     ├──────────────────────────────────────────────┤
//!     │ Tab Chuyển ô │ Enter Đăng ký │ ...           │  状态栏
//!     └──────────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
