//! Shared test helpers: a render target that records what it was told

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use portfolio_nav_core::{
    AnimationKind, AnimationTarget, ButtonId, ElementId, NavError, NavResult, RenderCommand,
    RenderTarget, ViewId,
};

/// In-memory render target.
///
/// Knows a fixed set of views; any other view id is reported as missing,
/// which lets tests exercise the element-not-found path.
#[derive(Default)]
pub struct RecordingTarget {
    known_views: HashSet<ViewId>,
    pub visible: HashMap<ViewId, bool>,
    pub texts: HashMap<ElementId, String>,
    pub buttons: HashMap<ButtonId, bool>,
    pub active_menus: HashSet<String>,
    pub animations: Vec<(AnimationTarget, AnimationKind)>,
    pub log: Vec<RenderCommand>,
}

impl RecordingTarget {
    pub fn with_views(views: impl IntoIterator<Item = ViewId>) -> Self {
        Self {
            known_views: views.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Forget a view, as if its element were removed from the page
    pub fn remove_view(&mut self, view: &ViewId) {
        self.known_views.remove(view);
    }

    pub fn visible_views(&self) -> Vec<&ViewId> {
        self.visible
            .iter()
            .filter_map(|(view, visible)| visible.then_some(view))
            .collect()
    }

    pub fn text(&self, element: ElementId) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    pub fn button(&self, button: ButtonId) -> Option<bool> {
        self.buttons.get(&button).copied()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
        self.animations.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn set_visible(&mut self, view: &ViewId, visible: bool) -> NavResult<()> {
        if !self.known_views.contains(view) {
            return Err(NavError::ElementNotFound(view.to_string()));
        }
        self.log.push(RenderCommand::SetVisible {
            view: view.clone(),
            visible,
        });
        self.visible.insert(view.clone(), visible);
        Ok(())
    }

    fn set_element_text(&mut self, element: ElementId, text: &str) -> NavResult<()> {
        self.log.push(RenderCommand::SetElementText {
            element,
            text: text.to_string(),
        });
        self.texts.insert(element, text.to_string());
        Ok(())
    }

    fn set_button_enabled(&mut self, button: ButtonId, enabled: bool) -> NavResult<()> {
        self.log.push(RenderCommand::SetButtonEnabled { button, enabled });
        self.buttons.insert(button, enabled);
        Ok(())
    }

    fn set_menu_active(&mut self, menu_id: &str, active: bool) -> NavResult<()> {
        if active {
            self.active_menus.insert(menu_id.to_string());
        } else {
            self.active_menus.remove(menu_id);
        }
        Ok(())
    }

    fn request_animation(
        &mut self,
        target: &AnimationTarget,
        kind: AnimationKind,
    ) -> NavResult<()> {
        self.log.push(RenderCommand::animation(target.clone(), kind));
        self.animations.push((target.clone(), kind));
        Ok(())
    }
}
