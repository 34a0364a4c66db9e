//! TPM 学生注册 TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs 执行：
//!
//!     init_logging()          // 日志写入 <config_dir>/tpm/tpm-tui.log
//!     load config             // 读取 config.json，失败时使用默认值；再叠加环境变量
//!     set_language/theme      // 恢复上次的界面设置
//!     CoreService::new()      // 创建 HTTP 客户端与 tokio 运行时
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     save config             // 保存语言和主题

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;

use backend::{config_dir, AppConfig, ConfigService, CoreService, LocalConfigService};
use i18n::{current_language, set_language};
use model::state::sign_up_fields;
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::{current_theme, set_theme};

fn main() -> Result<()> {
    // 1. 日志（终端被 TUI 占用，只能写文件）
    match config_dir() {
        Ok(dir) => match init_logging(&dir) {
            Ok(path) => log::info!("Logging to {}", path.display()),
            Err(e) => eprintln!("Logging disabled: {e:#}"),
        },
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    // 2. 配置
    let config_service = LocalConfigService::new()
        .inspect_err(|e| log::warn!("{e}, settings will not be saved"))
        .ok();
    let mut saved = load_config(config_service.as_ref());
    let mut config = saved.clone();
    config.apply_env_overrides(|key| std::env::var(key).ok());
    set_language(config.language());
    set_theme(config.theme);

    // 3. 业务服务
    let backend = CoreService::new(&config, sign_up_fields())?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(backend);
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 保存界面设置
    if let Some(service) = config_service {
        saved.language = current_language().code().to_string();
        saved.theme = current_theme();
        if let Err(e) = service.save(&saved) {
            log::warn!("{e}");
        }
    }

    result
}

/// 读取配置文件中的值（不含环境变量覆盖）
fn load_config(service: Option<&LocalConfigService>) -> AppConfig {
    let Some(service) = service else {
        return AppConfig::default();
    };
    match service.load() {
        Ok(config) => {
            log::info!("Loaded config from {}", service.path().display());
            config
        }
        Err(e) => {
            log::warn!("{e}, using defaults");
            AppConfig::default()
        }
    }
}
