//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作都通过 Message 来表达。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 内容面板子消息（方块光标、按钮）
//!         mod menu;           // 菜单面板子消息
//!
//!
//!     其中 AppMessage::Navigate 直接携带导航核心的 NavEvent，
//!     Update 层把它原样交给 NavigationController。
//!     菜单和内容子消息先在终端侧处理（移动光标、检查按钮），
//!     最终也会翻译成 NavEvent。
//!

mod app;
mod content;
mod menu;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use menu::MenuMessage;
