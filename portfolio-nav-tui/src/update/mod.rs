//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 导航状态只能经由 NavigationController 修改；
//! 这里负责终端侧的光标、焦点，以及把控制器的结果同步回光标。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod menu;               // 菜单子消息处理
//!         mod content;            // 内容面板子消息处理
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取渲染面来重新渲染。
//!

mod content;
mod menu;

use std::time::Instant;

use log::debug;
use portfolio_nav_core::{Dispatch, Key, NavEvent, View};

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Menu(menu_msg) => {
            menu::update(app, menu_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Navigate(event) => {
            navigate(app, &event);
        }

        AppMessage::Tick => {
            let slide_finished = app.surface.tick(Instant::now());
            if slide_finished {
                // 轮播停稳：关闭运动模糊
                navigate(app, &NavEvent::SlideChangeFinished);
            }
        }

        AppMessage::Noop => {}
    }
}

/// 把事件交给导航控制器，并同步终端侧的光标与焦点
pub(crate) fn navigate(app: &mut App, event: &NavEvent) -> Dispatch {
    let outcome = app.controller.dispatch(event, &mut app.surface);
    if !outcome.is_applied() {
        return outcome;
    }

    let state = app.controller.state();
    match &state.current_view {
        View::Submenu { .. } => {
            let index = state.current_index;
            let len = app.section_len();
            app.tiles.select(index, len);
        }
        View::Home | View::Contact => {
            // 从子菜单按 Esc 回到首页时，菜单光标跟随
            let menu_id = state.current_menu.clone();
            app.menu.select_id(&menu_id);
            app.focus = FocusPanel::Menu;
        }
        View::Detail { .. } => {}
    }

    if is_slide(event) {
        debug!("Slide started");
        app.controller.dispatch(&NavEvent::SlideChangeStarted, &mut app.surface);
    }

    outcome
}

fn is_slide(event: &NavEvent) -> bool {
    matches!(
        event,
        NavEvent::NavigatePrev
            | NavEvent::NavigateNext
            | NavEvent::KeyPressed(Key::ArrowLeft | Key::ArrowRight)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, MenuMessage};
    use portfolio_nav_core::{ButtonId, Catalog, ElementId};

    fn app() -> App {
        App::new(Catalog::builtin())
    }

    #[test]
    fn quit_and_focus() {
        let mut app = app();
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn menu_confirm_opens_submenu_and_focuses_content() {
        let mut app = app();
        update(&mut app, AppMessage::Menu(MenuMessage::SelectNext));
        update(&mut app, AppMessage::Menu(MenuMessage::SelectNext));
        update(&mut app, AppMessage::Menu(MenuMessage::Confirm));

        assert_eq!(
            app.view(),
            &View::Submenu {
                section: "aplikacje".to_string()
            }
        );
        assert_eq!(app.focus, FocusPanel::Content);
        assert_eq!(app.surface.active_menu(), Some("aplikacje"));
    }

    #[test]
    fn tile_activation_opens_detail() {
        let mut app = app();
        update(&mut app, AppMessage::Navigate(NavEvent::select_menu("inne")));
        update(&mut app, AppMessage::Content(ContentMessage::TileRight));
        update(&mut app, AppMessage::Content(ContentMessage::TileRight));
        update(&mut app, AppMessage::Content(ContentMessage::ActivateTile));

        assert_eq!(
            app.view(),
            &View::Detail {
                section: "inne".to_string(),
                index: 2
            }
        );
        assert_eq!(app.surface.text(ElementId::DetailTitle), "DIY projekty");
        assert_eq!(app.surface.text(ElementId::BreadcrumbSection), "Inne");
    }

    #[test]
    fn disabled_buttons_are_ignored() {
        let mut app = app();
        update(&mut app, AppMessage::Navigate(NavEvent::select_item("rower", 1)));
        assert!(!app.surface.is_enabled(ButtonId::Prev));

        update(&mut app, AppMessage::Content(ContentMessage::PressButton(ButtonId::Prev)));
        assert_eq!(app.controller.state().current_index, 0);

        update(&mut app, AppMessage::Content(ContentMessage::PressButton(ButtonId::Next)));
        assert_eq!(app.controller.state().current_index, 1);
        assert!(app.surface.motion_blur());
    }

    #[test]
    fn back_restores_tile_cursor() {
        let mut app = app();
        update(&mut app, AppMessage::Navigate(NavEvent::select_menu("aplikacje")));
        update(&mut app, AppMessage::Navigate(NavEvent::select_item("aplikacje", 5)));
        update(&mut app, AppMessage::Content(ContentMessage::PressButton(ButtonId::Back)));

        assert_eq!(
            app.view(),
            &View::Submenu {
                section: "aplikacje".to_string()
            }
        );
        assert_eq!(app.tiles.selected, 4);
    }

    #[test]
    fn escape_from_submenu_returns_focus_to_menu() {
        let mut app = app();
        update(&mut app, AppMessage::Navigate(NavEvent::select_menu("rower")));
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Navigate(NavEvent::KeyPressed(Key::Escape)));

        assert_eq!(app.view(), &View::Home);
        assert_eq!(app.focus, FocusPanel::Menu);
        assert_eq!(app.menu.current_id(), Some("home"));
    }

    #[test]
    fn unknown_events_leave_app_untouched() {
        let mut app = app();
        let outcome = navigate(&mut app, &NavEvent::select_menu("blog"));
        assert!(!outcome.is_applied());
        assert_eq!(app.view(), &View::Home);
    }
}
