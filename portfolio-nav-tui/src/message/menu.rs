//! 菜单相关消息

/// 菜单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 激活选中的菜单链接
    Confirm,
}
