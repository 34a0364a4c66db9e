//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(msg) = poll_submission(&app) {      // 后台请求是否已有结果，不等待
//!         update::update(&mut app , msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }
//!
//! 网络请求在 CoreService 的 tokio 运行时中执行，主循环从不阻塞在请求上；
//! 请求在途期间界面照常重绘，提交按钮显示为禁用。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台请求结果
        if let Some(msg) = event::poll_submission(app) {
            update::update(app, msg);
            continue;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
