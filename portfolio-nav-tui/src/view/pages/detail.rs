//! 详情页视图

use std::time::Instant;

use portfolio_nav_core::{ButtonId, ElementId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染详情页：面包屑、标题、位置计数和三个按钮
pub fn render(app: &App, frame: &mut Frame, area: Rect, now: Instant) {
    let c = colors();
    let surface = &app.surface;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 面包屑
            Constraint::Min(3),    // 标题
            Constraint::Length(1), // 按钮
        ])
        .split(area);

    let breadcrumb = Line::from(vec![
        Span::styled(
            format!("  {}", surface.text(ElementId::BreadcrumbSection)),
            Style::default().fg(c.muted),
        ),
        Span::styled(" › ", Style::default().fg(c.muted)),
        Span::styled(
            surface.text(ElementId::BreadcrumbItem).to_string(),
            Style::default().fg(c.fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(breadcrumb), layout[0]);

    // 滑入动画：内容区整体水平偏移
    let offset = surface.slide_offset(now);
    let mut title_style = Style::default().fg(c.accent).add_modifier(Modifier::BOLD);
    if surface.motion_blur() {
        title_style = title_style.add_modifier(Modifier::DIM);
    }
    let title = vec![
        Line::from(""),
        Line::styled(surface.text(ElementId::DetailTitle).to_string(), title_style),
        Line::from(""),
        Line::styled(
            surface.text(ElementId::DetailPosition).to_string(),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(title), shifted(layout[1], offset));

    let buttons = Line::from(vec![
        Span::raw("  "),
        Span::styled("[ < ]", Styles::button(surface.is_enabled(ButtonId::Prev))),
        Span::raw(" "),
        Span::styled("[ << ]", Styles::button(surface.is_enabled(ButtonId::Back))),
        Span::raw(" "),
        Span::styled("[ > ]", Styles::button(surface.is_enabled(ButtonId::Next))),
    ]);
    frame.render_widget(Paragraph::new(buttons), layout[2]);
}

/// 把区域向右（正）或向左（负）平移，不超出原区域
fn shifted(area: Rect, offset: i32) -> Rect {
    let base: i32 = 2;
    let indent = u16::try_from((base + offset).max(0)).unwrap_or(0);
    let indent = indent.min(area.width);
    Rect {
        x: area.x + indent,
        width: area.width - indent,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::shifted;
    use ratatui::layout::Rect;

    #[test]
    fn shifted_stays_inside_area() {
        let area = Rect::new(10, 0, 40, 5);
        assert_eq!(shifted(area, 0).x, 12);
        assert_eq!(shifted(area, 6).x, 18);
        assert_eq!(shifted(area, -6).x, 10);
        assert_eq!(shifted(Rect::new(0, 0, 3, 1), 6).width, 0);
    }
}
