//! 左侧菜单面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染菜单面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_menu();

    // 边框样式
    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Menu ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let active_menu = app.surface.active_menu();

    let items: Vec<ListItem> = app
        .menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = is_focused && i == app.menu.selected;
            let is_active = active_menu == Some(item.id.as_str());
            let prefix = if is_selected { "▶ " } else { "  " };

            // 激活的菜单链接加粗
            let style = if is_selected {
                Styles::selected()
            } else if is_active {
                Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{}", item.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.menu.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
