//! 内容面板更新逻辑

use portfolio_nav_core::{ButtonId, NavEvent, View};

use super::navigate;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let len = app.section_len();

    match msg {
        ContentMessage::TileLeft => app.tiles.left(),
        ContentMessage::TileRight => app.tiles.right(len),
        ContentMessage::TileUp => app.tiles.up(),
        ContentMessage::TileDown => app.tiles.down(len),

        ContentMessage::ActivateTile => {
            let View::Submenu { section } = app.view() else {
                return;
            };
            let Some(item) = app
                .controller
                .catalog()
                .section(section)
                .and_then(|s| s.item_at(app.tiles.selected))
            else {
                return;
            };
            let event = NavEvent::select_item(section.clone(), item.id);
            navigate(app, &event);
        }

        ContentMessage::PressButton(button) => {
            // 禁用的按钮不响应点击
            if !app.surface.is_enabled(button) {
                return;
            }
            let event = match button {
                ButtonId::Prev => NavEvent::NavigatePrev,
                ButtonId::Next => NavEvent::NavigateNext,
                ButtonId::Back => NavEvent::NavigateBack,
            };
            navigate(app, &event);
        }
    }
}
