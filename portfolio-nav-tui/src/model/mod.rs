//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 导航状态本身由 `portfolio-nav-core` 的 `NavigationController` 持有，
//! 这里只补充终端特有的状态：焦点、菜单光标、方块光标以及渲染面。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Menu / Content）
//!         mod menu;           // 菜单光标
//!         mod surface;        // 终端渲染面（RenderTarget 实现）
//!         mod tiles;          // 子菜单方块光标
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                      // 退出标志
//!             pub focus: FocusPanel,                      // 当前焦点
//!             pub menu: MenuState,                        // 菜单光标
//!             pub tiles: TileCursor,                      // 方块光标
//!             pub controller: NavigationController,       // 导航状态机
//!             pub surface: TerminalSurface,               // 渲染面
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、渲染面（TerminalSurface）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据流：
//!         用户按 →（详情页）
//!             ↓
//!         event/handler.rs 返回 AppMessage::Navigate(KeyPressed(ArrowRight))
//!             ↓
//!         update/mod.rs 调用 controller.dispatch(event, &mut surface)
//!             ↓
//!         控制器把渲染命令写入 surface（可见视图、面包屑、按钮、滑入动画）
//!             ↓
//!         view/pages/detail.rs 从 surface 读取文字和按钮状态并绘制
//!
//!     动画只是渲染面上的时间戳，由 Tick 消息结算，从不修改导航状态。
//!

mod app;
mod focus;
mod menu;
mod surface;
mod tiles;

pub use app::App;
pub use focus::FocusPanel;
pub use menu::MenuState;
pub use surface::TerminalSurface;
pub use tiles::{TileCursor, GRID_COLUMNS};
