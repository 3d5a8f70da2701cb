//! 各页面视图

pub mod contact;
pub mod detail;
pub mod home;
pub mod submenu;
