//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::hint_desc()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::hint_desc()));
        spans.push(Span::styled(msg.as_str(), Styles::help_text()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    match app.modal.active {
        Some(Modal::SignUpSuccess { .. }) => {
            return vec![
                (keys.arrows_lr, actions.choose),
                (keys.enter, actions.confirm),
                (keys.esc, actions.close),
            ];
        }
        Some(Modal::Help) => return vec![(keys.esc, actions.close)],
        None => {}
    }

    let mut hints = Vec::new();
    match app.current_page {
        Page::SignUp => {
            hints.push((keys.tab, actions.next_field));
            hints.push((keys.enter, actions.submit));
            hints.push(("Alt+V", actions.show_secrets));
            hints.push(("Alt+L", actions.sign_in));
        }
        Page::SignIn => {
            hints.push((keys.esc, actions.sign_up));
        }
    }
    hints.push(("Alt+G", actions.language));
    hints.push(("Alt+T", actions.theme));
    hints.push(("Alt+H", actions.help));
    hints.push(("Alt+Q", actions.quit));

    hints
}
