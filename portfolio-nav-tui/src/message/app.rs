//! 应用主消息枚举

use portfolio_nav_core::NavEvent;

use super::{ContentMessage, MenuMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 菜单面板相关消息
    Menu(MenuMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 直接交给导航状态机的事件
    Navigate(NavEvent),

    /// 结算动画
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
