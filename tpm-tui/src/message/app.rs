//! 应用主消息枚举

use super::{ModalMessage, SignUpMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 注册页面消息
    SignUp(SignUpMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 跳转到登录页（页脚链接）
    GoToSignIn,

    /// 从登录页返回注册页
    GoToSignUp,

    /// 显示帮助
    ShowHelp,

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
