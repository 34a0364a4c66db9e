//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
///
/// 注册页需要输入任意字符，所以页面操作都挂在 Alt 上。
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_F1: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 注册页
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const SHOW_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const GO_SIGN_IN: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 登录页
    pub const GO_SIGN_UP: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
}
