//! 内容面板相关消息

use portfolio_nav_core::ButtonId;

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    TileLeft,
    TileRight,
    TileUp,
    TileDown,
    /// 激活光标所在的方块
    ActivateTile,
    /// 按下详情页按钮（禁用时忽略）
    PressButton(ButtonId),
}
