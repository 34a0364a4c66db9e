//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**
//! 3. **表单字段归 `fields.*`**：标签、占位符、校验提示
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 注册页面
    pub sign_up: SignUpTexts,
    /// 注册表单字段
    pub fields: FieldTexts,
    /// 登录页面
    pub sign_in: SignInTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
}

/// 操作描述
pub struct ActionTexts {
    pub next_field: &'static str,
    pub submit: &'static str,
    pub show_secrets: &'static str,
    pub sign_in: &'static str,
    pub sign_up: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub choose: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// 注册页面文本
pub struct SignUpTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub footer_prompt: &'static str,
    pub footer_link: &'static str,
}

/// 注册表单字段文本
pub struct FieldTexts {
    pub student_id: &'static str,
    pub student_id_hint: &'static str,
    pub student_id_required: &'static str,
    pub email: &'static str,
    pub email_hint: &'static str,
    pub email_required: &'static str,
    pub password: &'static str,
    pub password_hint: &'static str,
    pub password_required: &'static str,
    pub confirm: &'static str,
    pub confirm_hint: &'static str,
    pub confirm_required: &'static str,
    pub password_mismatch: &'static str,
}

/// 登录页面文本
pub struct SignInTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer_prompt: &'static str,
    pub footer_link: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub sign_up_success: SignUpSuccessTexts,
    pub help: HelpTexts,
}

/// 注册成功确认弹窗
pub struct SignUpSuccessTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub go_to_sign_in: &'static str,
    pub cancel: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub shortcuts: &'static [(&'static str, &'static str)],
}

/// 状态栏文本
pub struct StatusBarTexts {
    pub submitting: &'static str,
    /// Neutral hint after an unexpected failure; carries no cause.
    pub try_again: &'static str,
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
}
