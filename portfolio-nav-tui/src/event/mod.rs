//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     handle_event 判断顺序：
//!         - 全局快捷键（q / Ctrl+C 退出，Esc，Tab 切换焦点），就地处理；
//!         - 焦点位于菜单面板，调用 handle_menu_keys 处理
//!         - 焦点位于内容面板，按当前视图调用 handle_submenu_keys / handle_detail_keys
//!
//!     Esc 与详情页的 ←/→ 不在终端侧解释，而是作为 NavEvent::KeyPressed
//!     原样交给导航状态机，由状态机决定“返回”还是“回到首页”。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
