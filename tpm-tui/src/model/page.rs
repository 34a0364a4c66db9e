//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 注册
    #[default]
    SignUp,
    /// 登录（注册成功后的跳转目标）
    SignIn,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::SignUp => t().sign_up.title,
            Page::SignIn => t().sign_in.title,
        }
    }
}
