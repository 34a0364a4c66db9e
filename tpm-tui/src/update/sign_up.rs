//! 注册页更新逻辑

use tpm_core::types::SubmissionOutcome;
use tpm_core::CoreError;

use crate::i18n::t;
use crate::message::SignUpMessage;
use crate::model::App;

/// 处理注册页消息
pub fn update(app: &mut App, msg: SignUpMessage) {
    let field_count = app.field_count();

    match msg {
        SignUpMessage::NextField => app.sign_up.focus_next(field_count),
        SignUpMessage::PrevField => app.sign_up.focus_prev(field_count),

        SignUpMessage::Input(c) => {
            if let Some(name) = editable_field(app) {
                app.sign_up.screen.draft_mut().push_char(&name, c);
            }
        }

        SignUpMessage::Backspace => {
            if let Some(name) = editable_field(app) {
                app.sign_up.screen.draft_mut().pop_char(&name);
            }
        }

        SignUpMessage::ToggleSecrets => {
            app.sign_up.show_secrets = !app.sign_up.show_secrets;
        }

        SignUpMessage::Submit => submit(app),

        SignUpMessage::Finished(outcome) => finish(app, &outcome),

        SignUpMessage::WorkerLost => {
            let outcome = app
                .backend
                .sign_up()
                .report_unexpected(CoreError::WorkerGone);
            finish(app, &outcome);
        }
    }
}

/// 当前可编辑的字段名；忙碌时或焦点在提交按钮上返回 None
fn editable_field(app: &App) -> Option<String> {
    if app.sign_up.screen.ui().busy() {
        return None;
    }
    app.backend
        .sign_up()
        .fields()
        .get(app.sign_up.focus)
        .map(|f| f.name.clone())
}

fn submit(app: &mut App) {
    // 提交按钮在忙碌或等待确认时禁用
    if app.sign_up.is_waiting() || !app.sign_up.screen.ui().can_submit() {
        return;
    }

    match app.sign_up.screen.begin_submission(app.backend.sign_up()) {
        Ok(payload) => {
            app.sign_up.pending = Some(app.backend.spawn_submission(payload));
            app.set_status(t().status_bar.submitting);
        }
        Err(failure) => {
            if let Some(index) = app.backend.sign_up().fields().position(failure.field()) {
                app.sign_up.focus = index;
            }
            app.clear_status();
        }
    }
}

fn finish(app: &mut App, outcome: &SubmissionOutcome) {
    app.sign_up.pending = None;
    app.sign_up.screen.complete(outcome);

    match outcome {
        SubmissionOutcome::RemoteSuccess => {
            app.sign_up.focus = 0;
            app.clear_status();
            app.modal.show_sign_up_success();
        }
        // 原因只写日志，界面只给出中性提示
        SubmissionOutcome::RemoteError(_) => app.set_status(t().status_bar.try_again),
        SubmissionOutcome::ValidationFailed(_) | SubmissionOutcome::RemoteRejected(_) => {
            app.clear_status();
        }
    }
}
