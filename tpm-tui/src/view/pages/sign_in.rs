//! 登录页面
//!
//! 注册成功后跳转到这里。登录流程不在本应用内，只提供返回注册页的入口。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染登录页面
pub fn render(frame: &mut Frame, area: Rect) {
    let texts = &t().sign_in;

    let [_, header, _, footer, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = Paragraph::new(vec![
        Line::styled(texts.title, Styles::title()),
        Line::styled(texts.subtitle, Styles::help_text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, header);

    let link = Line::from(vec![
        Span::styled(texts.footer_prompt, Styles::help_text()),
        Span::raw(" "),
        Span::styled(texts.footer_link, Styles::link()),
        Span::styled(" (Esc)", Styles::placeholder()),
    ]);
    frame.render_widget(Paragraph::new(link).alignment(Alignment::Center), footer);
}
