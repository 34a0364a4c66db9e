//! 页面状态模块

mod modal;
mod sign_up;

pub use modal::{toggle_choice, Modal, ModalState};
pub use sign_up::{sign_up_fields, SignUpState};
