//! juke-pager TUI
//!
//! 在终端中托管分页器，演示它的渲染结果与事件。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与日志 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//! fn `main()` {
//!
//!     LocalConfigService::load()  // 读取 ~/.config/juke-pager/config.json
//!     init_logging()              // 日志写入文件（终端被 TUI 占用）
//!     model::App::new()           // 挂载分页器
//!     init_terminal()             // 进入原始模式与备用屏幕
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     LocalConfigService::save()  // 记住退出时的分页器配置
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{init_logging, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = LocalConfigService::new()?;
    let first_run = !config_service.exists();
    let config = config_service
        .load()
        .with_context(|| format!("loading {}", config_service.path().display()))?;

    // 2. 初始化日志
    let log_path = init_logging(&config.log_filter)?;
    tracing::info!(
        log = %log_path.display(),
        config = %config_service.path().display(),
        "juke-pager starting"
    );
    if first_run {
        tracing::info!("no config file yet, using defaults");
    }

    // 3. 创建应用实例
    view::theme::set_theme(config.theme);
    let mut app = model::App::new(config.pager.clone()).context("mounting pager")?;

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 记住退出时的页码与每页条数
    let config = backend::AppConfig {
        pager: app.pager.options().clone(),
        ..config
    };
    if let Err(err) = config_service.save(&config) {
        tracing::warn!("failed to save config: {err}");
    }

    tracing::info!(events = app.event_log.len(), "juke-pager exiting");
    result
}
