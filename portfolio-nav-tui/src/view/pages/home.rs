//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 首页布局：欢迎信息 + 分区概览
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Portfolio",
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Pick a section from the menu, then browse its tiles",
            Style::default().fg(c.muted),
        )),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // 分区概览（每个分区的方块数量）
    let overview: Vec<Line> = app
        .controller
        .catalog()
        .sections()
        .iter()
        .map(|section| {
            Line::from(vec![
                Span::styled(
                    format!("  {:>2}  ", section.len()),
                    Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(section.label.clone(), Style::default().fg(c.fg)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    frame.render_widget(Paragraph::new(overview).block(block), layout[1]);
}
