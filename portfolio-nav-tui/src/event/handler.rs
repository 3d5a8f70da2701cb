//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use portfolio_nav_core::{ButtonId, Key, NavEvent, View};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, MenuMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop,                                       // 窗口大小改变等，自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::ESCAPE.matches(&key) {
        return AppMessage::Navigate(NavEvent::KeyPressed(Key::Escape));
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_menu() {
        handle_menu_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理菜单面板的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::MENU_UP.matches(&key) {
        return AppMessage::Menu(MenuMessage::SelectPrevious);
    }
    if DefaultKeymap::MENU_DOWN.matches(&key) {
        return AppMessage::Menu(MenuMessage::SelectNext);
    }
    // Enter: 激活菜单链接
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Menu(MenuMessage::Confirm);
    }

    match key.code {
        KeyCode::Char('k') => AppMessage::Menu(MenuMessage::SelectPrevious),
        KeyCode::Char('j') => AppMessage::Menu(MenuMessage::SelectNext),
        KeyCode::Home => AppMessage::Menu(MenuMessage::SelectFirst),
        KeyCode::End => AppMessage::Menu(MenuMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.view() {
        View::Submenu { .. } => handle_submenu_keys(key),
        View::Detail { .. } => handle_detail_keys(key),
        View::Home | View::Contact => AppMessage::Noop,
    }
}

/// 子菜单：方向键移动方块光标，Enter 打开方块
fn handle_submenu_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TileLeft),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::TileRight),
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::TileUp),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::TileDown),
        KeyCode::Enter => AppMessage::Content(ContentMessage::ActivateTile),
        _ => AppMessage::Noop,
    }
}

/// 详情页：←/→ 作为键盘事件交给状态机，p/n/b 模拟按钮点击
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ARROW_LEFT.matches(&key) {
        return AppMessage::Navigate(NavEvent::KeyPressed(Key::ArrowLeft));
    }
    if DefaultKeymap::ARROW_RIGHT.matches(&key) {
        return AppMessage::Navigate(NavEvent::KeyPressed(Key::ArrowRight));
    }
    if DefaultKeymap::BUTTON_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PressButton(ButtonId::Prev));
    }
    if DefaultKeymap::BUTTON_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::PressButton(ButtonId::Next));
    }
    if DefaultKeymap::BUTTON_BACK.matches(&key) {
        return AppMessage::Content(ContentMessage::PressButton(ButtonId::Back));
    }
    AppMessage::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use portfolio_nav_core::Catalog;

    use crate::model::FocusPanel;
    use crate::update::update;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app_in_content() -> App {
        let mut app = App::new(Catalog::builtin());
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn global_keys() {
        let app = App::default();
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_event(Event::Key(ctrl_c), &app), AppMessage::Quit);
        assert_eq!(handle_event(press(KeyCode::Tab), &app), AppMessage::ToggleFocus);
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Navigate(NavEvent::KeyPressed(Key::Escape))
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }

    #[test]
    fn menu_focus_maps_cursor_keys() {
        let app = App::default();
        assert_eq!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Menu(MenuMessage::SelectNext)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Menu(MenuMessage::Confirm)
        );
    }

    #[test]
    fn arrows_depend_on_view() {
        let mut app = app_in_content();
        assert_eq!(handle_event(press(KeyCode::Left), &app), AppMessage::Noop);

        update(&mut app, AppMessage::Navigate(NavEvent::select_menu("aplikacje")));
        assert_eq!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::TileLeft)
        );

        update(&mut app, AppMessage::Navigate(NavEvent::select_item("aplikacje", 2)));
        assert_eq!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Navigate(NavEvent::KeyPressed(Key::ArrowLeft))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('b')), &app),
            AppMessage::Content(ContentMessage::PressButton(ButtonId::Back))
        );
    }
}
