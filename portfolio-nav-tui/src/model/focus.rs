//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧菜单面板
    #[default]
    Menu,
    /// 右侧内容面板（子菜单方块 / 详情页按钮）
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Menu => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Menu,
        }
    }

    pub fn is_menu(self) -> bool {
        matches!(self, FocusPanel::Menu)
    }

    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
