//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（等同于“取消”）
    Close,

    /// 在弹窗按钮之间切换
    ToggleSelection,

    /// 确认当前按钮
    Confirm,
}
