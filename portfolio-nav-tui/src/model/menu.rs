//! 顶部菜单状态定义

use portfolio_nav_core::Catalog;

/// 菜单项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// 菜单 ID（`home`、分区 ID 或 `kontakt`）
    pub id: String,
    /// 显示文本
    pub label: String,
}

/// 菜单光标状态
///
/// 光标只决定按 Enter 时激活哪一项；哪一项“处于激活状态”由渲染面记录。
pub struct MenuState {
    pub items: Vec<MenuItem>,
    pub selected: usize,
}

impl MenuState {
    /// 按目录生成菜单：首页、各分区、联系
    pub fn new(catalog: &Catalog) -> Self {
        let items = catalog
            .menu_ids()
            .into_iter()
            .map(|id| MenuItem {
                id: id.to_string(),
                label: catalog.label(id).to_string(),
            })
            .collect();
        Self { items, selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 把光标移到指定菜单（例如按 Esc 回到首页后）
    pub fn select_id(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }

    /// 获取当前选中的菜单 ID
    pub fn current_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|item| item.id.as_str())
    }
}
