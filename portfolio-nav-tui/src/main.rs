//! Portfolio TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)，导航状态由 `portfolio-nav-core` 持有
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)，只读取渲染面
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 启动配置 (`backend/`)
//!
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件
//!     config.load()           // 主题 + 内容目录
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例，渲染首页
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
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

use anyhow::Result;
use log::info;

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 0. 日志（失败不影响运行）
    match init_logging() {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(err) => eprintln!("logging disabled: {err:#}"),
    }

    // 1. 加载配置
    let config = LocalConfigService::new().load()?;
    view::theme::set_theme(config.theme);

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例
    let mut app = model::App::new(config.catalog);

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    info!("Bye");
    result
}
