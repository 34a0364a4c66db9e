//! 注册页面状态

use std::sync::mpsc;

use tpm_core::types::{ConfirmationRule, FieldDefinition, FieldSet, SubmissionOutcome};
use tpm_core::SignUpScreen;

use crate::i18n::t;

/// 按当前语言构建注册字段（与 TPM 账户接口的 key/email/password 对应）
pub fn sign_up_fields() -> FieldSet {
    let f = &t().fields;
    FieldSet::new(
        vec![
            FieldDefinition::new("key", f.student_id_required)
                .with_label(f.student_id)
                .with_placeholder(f.student_id_hint),
            FieldDefinition::new("email", f.email_required)
                .with_label(f.email)
                .with_placeholder(f.email_hint),
            FieldDefinition::new("password", f.password_required)
                .with_label(f.password)
                .with_placeholder(f.password_hint)
                .secret(),
            FieldDefinition::new("confirm", f.confirm_required)
                .with_label(f.confirm)
                .with_placeholder(f.confirm_hint)
                .secret(),
        ],
        ConfirmationRule::new("confirm", "password", f.password_mismatch),
    )
}

/// 注册页面状态
#[derive(Debug, Default)]
pub struct SignUpState {
    /// 草稿与界面状态
    pub screen: SignUpScreen,
    /// 焦点：`0..field_count` 为输入框，`field_count` 为提交按钮
    pub focus: usize,
    /// 是否明文显示密码
    pub show_secrets: bool,
    /// 后台请求的结果通道
    pub pending: Option<mpsc::Receiver<SubmissionOutcome>>,
}

impl SignUpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 下一个焦点（循环）
    pub fn focus_next(&mut self, field_count: usize) {
        self.focus = (self.focus.min(field_count) + 1) % (field_count + 1);
    }

    /// 上一个焦点（循环）
    pub fn focus_prev(&mut self, field_count: usize) {
        self.focus = match self.focus.min(field_count) {
            0 => field_count,
            n => n - 1,
        };
    }

    pub fn is_submit_focused(&self, field_count: usize) -> bool {
        self.focus >= field_count
    }

    /// 是否有请求在途
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }
}
