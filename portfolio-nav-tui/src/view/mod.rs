//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model（主要是渲染面 TerminalSurface），从不修改状态。
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 菜单 + 内容 + 状态栏
//!         mod components;     // 菜单面板、状态栏
//!         mod pages;          // 首页、子菜单、详情、联系
//!         pub mod theme;      // 颜色与样式
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
