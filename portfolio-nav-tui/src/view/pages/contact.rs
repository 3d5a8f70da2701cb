//! 联系页视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::colors;

/// 渲染联系页
pub fn render(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  Kontakt", Style::default().fg(c.accent)),
        Line::from(""),
        Line::styled(
            "  Reach out through the contact form on the site.",
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
