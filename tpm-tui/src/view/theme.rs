//! 主题和样式定义
//!
//! 颜色方案按主题切换；[`Styles`] 是界面使用的命名样式表
//! （容器、帮助文本、弹窗、对话框按钮、标题按钮等）。

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 默认为 0 (Light)，相应地，1 为 Dark
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// 该主题的颜色方案
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Light => ThemeColors::light(),
            Theme::Dark => ThemeColors::dark(),
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Light => 0,
        Theme::Dark => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题
pub fn current_theme() -> Theme {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    current_theme().colors()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    /// 品牌主色（按钮、标题、链接）
    pub primary: Color,
    pub on_primary: Color,
    pub border: Color,
    pub border_focused: Color,
    /// 弹窗背景
    pub surface: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 255, 255),
            fg: Color::Rgb(51, 51, 51),
            primary: Color::Rgb(0, 102, 204),
            on_primary: Color::White,
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            surface: Color::Rgb(245, 245, 245),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            primary: Color::Rgb(0, 122, 204),
            on_primary: Color::White,
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            surface: Color::Rgb(52, 52, 52),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// 命名样式表
pub struct Styles;

impl Styles {
    /// 页面容器（背景）
    pub fn container() -> Style {
        let c = colors();
        Style::default().bg(c.bg).fg(c.fg)
    }

    /// 标题下方的说明文字
    pub fn help_text() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::BOLD)
    }

    /// 页面标题
    pub fn title() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 字段标签
    pub fn label() -> Style {
        Style::default().fg(colors().fg)
    }

    /// 输入内容
    pub fn input(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default().fg(c.primary)
        } else {
            Style::default().fg(c.fg)
        }
    }

    /// 占位符
    pub fn placeholder() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 错误提示
    pub fn error_text() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    /// 主按钮（提交）
    pub fn header_button(focused: bool) -> Style {
        let c = colors();
        let style = Style::default()
            .bg(c.primary)
            .fg(c.on_primary)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// 主按钮（忙碌时）
    pub fn header_button_disabled() -> Style {
        let c = colors();
        Style::default().bg(c.border).fg(c.muted)
    }

    /// 页脚链接
    pub fn link() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// 弹窗主体
    pub fn modal_view() -> Style {
        let c = colors();
        Style::default().bg(c.surface).fg(c.fg)
    }

    /// 弹窗标题
    pub fn modal_title() -> Style {
        Self::title()
    }

    /// 对话框按钮
    pub fn dialog_button(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default()
                .bg(c.primary)
                .fg(c.on_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.primary)
        }
    }

    /// 顶部标题栏
    pub fn title_bar() -> Style {
        let c = colors();
        Style::default().bg(c.primary).fg(c.on_primary)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.surface).fg(c.fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().primary)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_match_config_values() {
        for theme in [Theme::Light, Theme::Dark] {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.name()));
        }
    }

    #[test]
    fn next_toggles() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Light);
    }

    #[test]
    fn schemes_differ_in_background() {
        assert_ne!(Theme::Light.colors().bg, Theme::Dark.colors().bg);
    }
}
