//! 子菜单视图：方块网格

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{App, GRID_COLUMNS};
use crate::view::theme::{colors, Styles};

/// 方块高度
const TILE_HEIGHT: u16 = 5;

/// 渲染某个分区的子菜单
pub fn render(app: &App, section_id: &str, frame: &mut Frame, area: Rect, now: Instant) {
    let Some(section) = app.controller.catalog().section(section_id) else {
        return;
    };
    let c = colors();
    let revealed = app
        .surface
        .revealed_tiles(section_id, section.len(), now);

    let rows = section.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(TILE_HEIGHT))
                .take(rows)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (index, item) in section.items.iter().enumerate() {
        // 交错动画：尚未出现的方块留空
        if index >= revealed {
            break;
        }

        let row = index / GRID_COLUMNS;
        let col = index % GRID_COLUMNS;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); GRID_COLUMNS])
            .split(row_areas[row]);
        let cell = cells[col];

        let is_selected = app.focus.is_content() && index == app.tiles.selected;
        let border_style = if is_selected {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        };
        let title_style = if is_selected {
            Styles::selected()
        } else {
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
        };

        let width = usize::from(cell.width.saturating_sub(4));
        let block = Block::default()
            .title(format!(" {} ", item.id))
            .borders(Borders::ALL)
            .border_style(border_style);
        let content = vec![
            Line::from(""),
            Line::styled(format!(" {}", fit(&item.title, width)), title_style),
        ];
        frame.render_widget(Paragraph::new(content).block(block), cell);
    }
}

/// 按显示宽度截断标题
fn fit(title: &str, width: usize) -> String {
    if title.width() <= width {
        return title.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in title.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::fit;

    #[test]
    fn fit_truncates_by_display_width() {
        assert_eq!(fit("Podróże", 10), "Podróże");
        assert_eq!(fit("Analytics Dashboard", 8), "Analyti…");
    }
}
