//! 弹窗/对话框状态

use tpm_core::types::ConfirmationChoice;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 注册成功后的确认弹窗
    SignUpSuccess {
        /// 当前高亮的按钮
        selected: ConfirmationChoice,
    },
    /// 快捷键帮助
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示注册成功弹窗，默认选中“登录”
    pub fn show_sign_up_success(&mut self) {
        self.active = Some(Modal::SignUpSuccess {
            selected: ConfirmationChoice::SignIn,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}

/// 在两个按钮之间切换
pub fn toggle_choice(choice: ConfirmationChoice) -> ConfirmationChoice {
    match choice {
        ConfirmationChoice::SignIn => ConfirmationChoice::Dismiss,
        ConfirmationChoice::Dismiss => ConfirmationChoice::SignIn,
    }
}
