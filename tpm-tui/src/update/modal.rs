//! 弹窗更新逻辑

use tpm_core::types::{ConfirmationChoice, NavigationRequest};

use crate::message::ModalMessage;
use crate::model::state::toggle_choice;
use crate::model::{App, Modal, Page};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(modal) = app.modal.active.clone() else {
        return;
    };

    match modal {
        Modal::SignUpSuccess { selected } => match msg {
            ModalMessage::Close => resolve(app, ConfirmationChoice::Dismiss),
            ModalMessage::ToggleSelection => {
                app.modal.active = Some(Modal::SignUpSuccess {
                    selected: toggle_choice(selected),
                });
            }
            ModalMessage::Confirm => resolve(app, selected),
        },
        Modal::Help => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
        }
    }
}

/// 关闭确认弹窗；只有用户选择“登录”时才跳转
fn resolve(app: &mut App, choice: ConfirmationChoice) {
    app.modal.close();
    if let Some(NavigationRequest::SignIn) = app.sign_up.screen.choose(choice) {
        log::info!("Registration confirmed, switching to sign-in");
        app.current_page = Page::SignIn;
    }
}
