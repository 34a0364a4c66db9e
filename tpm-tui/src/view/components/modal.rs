//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tpm_core::types::ConfirmationChoice;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::SignUpSuccess { selected } => render_sign_up_success(frame, *selected),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::modal_title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Styles::modal_view())
}

/// 注册成功：询问是否前往登录
fn render_sign_up_success(frame: &mut Frame, selected: ConfirmationChoice) {
    let texts = &t().modal.sign_up_success;
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let buttons = Line::from(vec![
        Span::styled(
            format!(" {} ", texts.go_to_sign_in),
            Styles::dialog_button(selected == ConfirmationChoice::SignIn),
        ),
        Span::raw("    "),
        Span::styled(
            format!(" {} ", texts.cancel),
            Styles::dialog_button(selected == ConfirmationChoice::Dismiss),
        ),
    ]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(texts.message),
        Line::from(""),
        buttons,
    ])
    .alignment(Alignment::Center)
    .block(dialog_block(texts.title));

    frame.render_widget(body, area);
}

/// 快捷键帮助
fn render_help(frame: &mut Frame) {
    let texts = &t().modal.help;
    let key_width = texts
        .shortcuts
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = texts
        .shortcuts
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<key_width$}  "), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ])
        })
        .collect();

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(50, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(dialog_block(texts.title)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(46, 7, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));

        let rect = centered_rect(10, 3, Rect::new(0, 0, 30, 11));
        assert_eq!(rect, Rect::new(10, 4, 10, 3));
    }
}
