//! 底部状态栏组件

use portfolio_nav_core::View;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点和视图生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Switch Panels")];

    match app.focus {
        FocusPanel::Menu => {
            hints.push(("↑↓", "Menu"));
            hints.push(("Enter", "Open"));
        }
        FocusPanel::Content => match app.view() {
            View::Submenu { .. } => {
                hints.push(("←↑↓→", "Select"));
                hints.push(("Enter", "Open"));
            }
            View::Detail { .. } => {
                hints.push(("←→", "Prev/Next"));
                hints.push(("p/n/b", "Buttons"));
            }
            View::Home | View::Contact => {}
        },
    }

    match app.view() {
        View::Detail { .. } => hints.push(("Esc", "Back")),
        View::Submenu { .. } => hints.push(("Esc", "Home")),
        View::Home | View::Contact => {}
    }

    hints.push(("q", "Quit"));
    hints
}
