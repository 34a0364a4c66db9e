//! 应用主状态结构

use super::{ModalState, Page, SignUpState};
use crate::backend::CoreService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 注册页面状态
    pub sign_up: SignUpState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 业务服务
    pub backend: CoreService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend: CoreService) -> Self {
        Self {
            should_quit: false,
            current_page: Page::default(),
            status_message: None,
            sign_up: SignUpState::new(),
            modal: ModalState::new(),
            backend,
        }
    }

    /// 注册表单的输入框数量
    pub fn field_count(&self) -> usize {
        self.backend.sign_up().fields().len()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
