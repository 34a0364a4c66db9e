//! 页面渲染

pub mod sign_in;
pub mod sign_up;
