//! 子菜单方块网格的光标

/// 每行方块数
pub const GRID_COLUMNS: usize = 3;

/// 方块光标（按目录顺序的下标）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileCursor {
    pub selected: usize,
}

impl TileCursor {
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = index.min(len.saturating_sub(1));
    }

    pub fn left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn down(&mut self, len: usize) {
        if self.selected + GRID_COLUMNS < len {
            self.selected += GRID_COLUMNS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_within_grid() {
        let mut cursor = TileCursor::default();
        cursor.left();
        cursor.up();
        assert_eq!(cursor.selected, 0);

        cursor.down(6);
        assert_eq!(cursor.selected, 3);
        cursor.down(6);
        assert_eq!(cursor.selected, 3);
        cursor.right(6);
        cursor.right(6);
        cursor.right(6);
        assert_eq!(cursor.selected, 5);
        cursor.up();
        assert_eq!(cursor.selected, 2);
    }

    #[test]
    fn select_clamps_to_section() {
        let mut cursor = TileCursor::default();
        cursor.select(9, 4);
        assert_eq!(cursor.selected, 3);
        cursor.select(1, 0);
        assert_eq!(cursor.selected, 0);
    }
}
