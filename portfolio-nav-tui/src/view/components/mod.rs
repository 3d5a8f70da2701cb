//! 通用组件

pub mod navigation;
pub mod statusbar;
