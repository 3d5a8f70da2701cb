//! 菜单更新逻辑

use portfolio_nav_core::{NavEvent, View};

use super::navigate;
use crate::message::MenuMessage;
use crate::model::{App, FocusPanel};

/// 处理菜单消息
pub fn update(app: &mut App, msg: MenuMessage) {
    match msg {
        MenuMessage::SelectPrevious => app.menu.select_previous(),
        MenuMessage::SelectNext => app.menu.select_next(),
        MenuMessage::SelectFirst => app.menu.select_first(),
        MenuMessage::SelectLast => app.menu.select_last(),

        MenuMessage::Confirm => {
            let Some(menu_id) = app.menu.current_id().map(str::to_string) else {
                return;
            };
            let outcome = navigate(app, &NavEvent::SelectMenu(menu_id));
            // 进入子菜单后焦点移到方块网格
            if outcome.is_applied() && matches!(app.view(), View::Submenu { .. }) {
                app.focus = FocusPanel::Content;
            }
        }
    }
}
