//! 主布局渲染

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 页面 + 状态栏
    let [title_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_title_bar(app, frame, title_area);

    frame.render_widget(Block::default().style(Styles::container()), page_area);
    match app.current_page {
        Page::SignUp => pages::sign_up::render(app, frame, page_area),
        Page::SignIn => pages::sign_in::render(frame, page_area),
    }

    components::statusbar::render(app, frame, status_area);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        " {} · {}",
        t().common.app_name,
        app.current_page.title()
    ))
    .style(Styles::title_bar());
    frame.render_widget(title, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fill_valid_draft, test_app};
    use ratatui::{backend::TestBackend, Terminal};
    use tpm_api::ApiResponse;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn sign_up_page_shows_labels_and_masks_passwords() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        fill_valid_draft(&mut app);

        let screen = draw(&app);

        for field in app.backend.sign_up().fields().fields() {
            assert!(screen.contains(&field.label), "missing label {}", field.label);
        }
        assert!(screen.contains("2051052001@ou.edu.vn"));
        assert!(!screen.contains("s3cret!"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn validation_error_is_rendered() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        app.sign_up
            .screen
            .begin_submission(app.backend.sign_up())
            .unwrap_err();

        let screen = draw(&app);

        assert!(screen.contains(app.sign_up.screen.ui().error_message()));
    }

    #[test]
    fn success_dialog_is_rendered_on_top() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        app.modal.show_sign_up_success();

        let screen = draw(&app);

        assert!(screen.contains(t().modal.sign_up_success.message));
        assert!(screen.contains(t().modal.sign_up_success.cancel));
    }

    #[test]
    fn sign_in_page_offers_way_back() {
        let mut app = test_app(Ok(ApiResponse::new(201, None)));
        app.current_page = Page::SignIn;

        let screen = draw(&app);

        assert!(screen.contains(t().sign_in.footer_link));
    }
}
