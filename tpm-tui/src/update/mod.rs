//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod sign_up;            // 注册页子消息处理（输入、提交、后台结果）
//!         mod modal;              // 弹窗子消息处理（确认跳转 / 取消）
//!
//!     其中 update() 使用 match 穷举 AppMessage，
//!     页面和弹窗的子消息委托给子模块处理。
//!

mod modal;
mod sign_up;

use crate::i18n::{current_language, set_language, t};
use crate::message::AppMessage;
use crate::model::state::sign_up_fields;
use crate::model::{App, Page};
use crate::view::theme::{current_theme, set_theme};

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::SignUp(sign_up_msg) => sign_up::update(app, sign_up_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::GoToSignIn => {
            // 请求在途时忽略页脚链接
            if app.sign_up.is_waiting() {
                return;
            }
            app.sign_up.screen.reset();
            app.sign_up.focus = 0;
            app.current_page = Page::SignIn;
            app.clear_status();
        }

        AppMessage::GoToSignUp => {
            app.current_page = Page::SignUp;
            app.clear_status();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleLanguage => {
            let lang = current_language().next();
            set_language(lang);
            // 校验提示随语言变化，重建字段定义
            app.backend.set_fields(sign_up_fields());
            app.set_status(format!(
                "{}: {}",
                t().status_bar.language_changed,
                lang.display_name()
            ));
        }

        AppMessage::ToggleTheme => {
            let theme = current_theme().next();
            set_theme(theme);
            app.set_status(format!("{}: {}", t().status_bar.theme_changed, theme.name()));
        }

        AppMessage::Noop => {}
    }
}
