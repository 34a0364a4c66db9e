//! 事件处理器

use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, SignUpMessage};
use crate::model::{App, Modal, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 轮询后台请求结果
///
/// 只读取一次，不阻塞；通道关闭但没有结果时报告 `WorkerLost`。
pub fn poll_submission(app: &App) -> Option<AppMessage> {
    let rx = app.sign_up.pending.as_ref()?;
    match rx.try_recv() {
        Ok(outcome) => Some(AppMessage::SignUp(SignUpMessage::Finished(outcome))),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(AppMessage::SignUp(SignUpMessage::WorkerLost)),
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_F1.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    match app.current_page {
        Page::SignUp => handle_sign_up_keys(key, app),
        Page::SignIn => handle_sign_in_keys(key),
    }
}

/// 处理注册页的按键
fn handle_sign_up_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::SignUp(SignUpMessage::Submit);
    }
    if DefaultKeymap::SHOW_SECRETS.matches(&key) {
        return AppMessage::SignUp(SignUpMessage::ToggleSecrets);
    }
    if DefaultKeymap::GO_SIGN_IN.matches(&key) {
        return AppMessage::GoToSignIn;
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => SignUpMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => SignUpMessage::PrevField,
        // Enter: 最后一个输入框或提交按钮上提交，否则跳到下一个输入框
        KeyCode::Enter => {
            let count = app.field_count();
            if app.sign_up.focus + 1 >= count {
                SignUpMessage::Submit
            } else {
                SignUpMessage::NextField
            }
        }
        KeyCode::Backspace => SignUpMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            SignUpMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::SignUp(msg)
}

/// 处理登录页的按键
fn handle_sign_in_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::GO_SIGN_UP.matches(&key) {
        return AppMessage::GoToSignUp;
    }
    AppMessage::Noop
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::SignUpSuccess { .. }) => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                AppMessage::Modal(ModalMessage::ToggleSelection)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Some(Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::F(1) => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;
    use std::sync::mpsc;
    use tpm_api::ApiResponse;
    use tpm_core::types::SubmissionOutcome;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn printable_keys_become_input() {
        let app = test_app(Ok(ApiResponse::new(201, None)));
        let msg = handle_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::SignUp(SignUpMessage::Input('A'))));
        // 'q' 是普通输入，不是退出
        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::SignUp(SignUpMessage::Input('q'))));
    }

    #[test]
    fn enter_advances_until_last_field() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        let enter = || press(KeyCode::Enter, KeyModifiers::NONE);

        assert!(matches!(
            handle_event(enter(), &app),
            AppMessage::SignUp(SignUpMessage::NextField)
        ));
        app.sign_up.focus = app.field_count() - 1;
        assert!(matches!(
            handle_event(enter(), &app),
            AppMessage::SignUp(SignUpMessage::Submit)
        ));
        app.sign_up.focus = app.field_count();
        assert!(matches!(
            handle_event(enter(), &app),
            AppMessage::SignUp(SignUpMessage::Submit)
        ));
    }

    #[test]
    fn alt_shortcuts() {
        let app = test_app(Ok(ApiResponse::new(201, None)));
        let alt = |c| press(KeyCode::Char(c), KeyModifiers::ALT);
        assert!(matches!(handle_event(alt('s'), &app), AppMessage::SignUp(SignUpMessage::Submit)));
        assert!(matches!(handle_event(alt('l'), &app), AppMessage::GoToSignIn));
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(handle_event(alt('g'), &app), AppMessage::ToggleLanguage));
    }

    #[test]
    fn modal_captures_keys() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        app.modal.show_sign_up_success();

        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));
        let msg = handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::ToggleSelection)));
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn sign_in_page_goes_back() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        app.current_page = Page::SignIn;
        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::GoToSignUp));
    }

    #[test]
    fn poll_submission_reports_outcome_and_lost_worker() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        assert!(poll_submission(&app).is_none());

        let (tx, rx) = mpsc::channel();
        app.sign_up.pending = Some(rx);
        assert!(poll_submission(&app).is_none());

        tx.send(SubmissionOutcome::RemoteSuccess).unwrap();
        assert!(matches!(
            poll_submission(&app),
            Some(AppMessage::SignUp(SignUpMessage::Finished(SubmissionOutcome::RemoteSuccess)))
        ));

        drop(tx);
        assert!(matches!(
            poll_submission(&app),
            Some(AppMessage::SignUp(SignUpMessage::WorkerLost))
        ));
    }
}
