//! 主布局渲染

use std::time::Instant;

use portfolio_nav_core::{ElementId, ViewId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let now = Instant::now();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22), // 左侧菜单
            Constraint::Percentage(78), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1], now);
    components::statusbar::render(app, frame, main_layout[2]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Portfolio v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据渲染面上可见的视图渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let c = colors();
    let catalog = app.controller.catalog();

    let border_style = if app.focus.is_content() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let visible = app.surface.visible_view();
    let page_title = match visible {
        Some(ViewId::Home) | None => catalog.label("home").to_string(),
        Some(ViewId::Contact) => catalog.label("kontakt").to_string(),
        Some(ViewId::Submenu(section)) => catalog.label(section).to_string(),
        Some(ViewId::Detail) => format!(
            "{} › {}",
            app.surface.text(ElementId::BreadcrumbSection),
            app.surface.text(ElementId::BreadcrumbItem)
        ),
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match visible {
        Some(ViewId::Home) | None => pages::home::render(app, frame, inner_area),
        Some(ViewId::Contact) => pages::contact::render(frame, inner_area),
        Some(ViewId::Submenu(section)) => {
            pages::submenu::render(app, section, frame, inner_area, now);
        }
        Some(ViewId::Detail) => pages::detail::render(app, frame, inner_area, now),
    }
}
