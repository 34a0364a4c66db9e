//! 注册页面

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tpm_core::types::FieldDefinition;

use crate::i18n::t;
use crate::model::App;
use crate::util::tail_fit;
use crate::view::theme::Styles;

/// 表单最大宽度
const FORM_WIDTH: u16 = 60;
const CURSOR: &str = "▎";
const MASK: char = '•';

/// 渲染注册页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().sign_up;
    let fields = app.backend.sign_up().fields();
    let ui = app.sign_up.screen.ui();

    let [_, form, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(FORM_WIDTH),
        Constraint::Fill(1),
    ])
    .areas(area);

    // 标题(2) + 每个输入框(3) + 错误(1) + 按钮(1) + 空行(1) + 页脚(1)
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(2)];
    constraints.extend(fields.fields().iter().map(|_| Constraint::Length(3)));
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ]);
    let rows = Layout::vertical(constraints).split(form);

    // 标题
    let header = Paragraph::new(vec![
        Line::styled(texts.title, Styles::title()),
        Line::styled(texts.subtitle, Styles::help_text()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, rows[1]);

    // 输入框
    for (index, field) in fields.fields().iter().enumerate() {
        let focused = app.sign_up.focus == index && !ui.busy();
        render_field(app, frame, rows[index + 2], field, focused);
    }

    let after = fields.len() + 2;

    // 错误信息（校验失败或服务端拒绝）
    if ui.error_visible() {
        let error = Paragraph::new(ui.error_message())
            .style(Styles::error_text())
            .alignment(Alignment::Center);
        frame.render_widget(error, rows[after]);
    }

    // 提交按钮：忙碌或等待确认时禁用
    let button = if ui.busy() {
        Span::styled(format!("  {}  ", t().common.loading), Styles::header_button_disabled())
    } else if ui.can_submit() {
        let focused = app.sign_up.is_submit_focused(fields.len());
        Span::styled(format!("  {}  ", texts.submit), Styles::header_button(focused))
    } else {
        Span::styled(format!("  {}  ", texts.submit), Styles::header_button_disabled())
    };
    frame.render_widget(
        Paragraph::new(Line::from(button)).alignment(Alignment::Center),
        rows[after + 1],
    );

    // 页脚：已有账号？登录
    let footer = Line::from(vec![
        Span::styled(texts.footer_prompt, Styles::help_text()),
        Span::raw(" "),
        Span::styled(texts.footer_link, Styles::link()),
        Span::styled(" (Alt+L)", Styles::placeholder()),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        rows[after + 3],
    );
}

/// 渲染单个输入框
fn render_field(app: &App, frame: &mut Frame, area: Rect, field: &FieldDefinition, focused: bool) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), Styles::label()))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = app
        .sign_up
        .screen
        .draft()
        .get(&field.name)
        .unwrap_or_default();

    let line = if value.is_empty() && !focused {
        Line::styled(field.placeholder.as_str(), Styles::placeholder())
    } else {
        let shown = if field.secret && !app.sign_up.show_secrets {
            MASK.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let width = usize::from(inner.width.saturating_sub(1));
        let mut spans = vec![Span::styled(
            tail_fit(&shown, width).to_string(),
            Styles::input(focused),
        )];
        if focused {
            spans.push(Span::styled(CURSOR, Styles::input(true)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), inner);
}
