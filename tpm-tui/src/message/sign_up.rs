//! 注册页面消息

use tpm_core::types::SubmissionOutcome;

/// 注册页面消息
#[derive(Debug, Clone)]
pub enum SignUpMessage {
    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    ToggleSecrets,

    /// 提交注册
    Submit,

    /// 后台请求返回结果
    Finished(SubmissionOutcome),

    /// 后台任务未返回结果就退出
    WorkerLost,
}
