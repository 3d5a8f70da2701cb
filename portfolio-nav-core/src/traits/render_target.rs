//! Render target abstraction Trait

use crate::error::NavResult;
use crate::types::{AnimationKind, AnimationTarget, ButtonId, ElementId, RenderCommand, ViewId};

/// Render target Trait
///
/// The navigation layer only ever writes to the target; it never reads
/// visual state back.
///
/// Platform implementations:
/// - Terminal: `TerminalSurface` (portfolio-nav-tui)
/// - Tests: recording mock
pub trait RenderTarget {
    /// Show or hide a top-level view
    ///
    /// # Returns
    /// * `Err(NavError::ElementNotFound)` - the target has no such view
    fn set_visible(&mut self, view: &ViewId, visible: bool) -> NavResult<()>;

    /// Replace the text content of an element
    fn set_element_text(&mut self, element: ElementId, text: &str) -> NavResult<()>;

    /// Enable or disable a navigation button
    fn set_button_enabled(&mut self, button: ButtonId, enabled: bool) -> NavResult<()>;

    /// Highlight (or un-highlight) a top menu link
    fn set_menu_active(&mut self, menu_id: &str, active: bool) -> NavResult<()>;

    /// Start a cosmetic animation. Fire-and-forget.
    fn request_animation(&mut self, target: &AnimationTarget, kind: AnimationKind)
        -> NavResult<()>;

    /// Apply one render command
    fn apply(&mut self, command: &RenderCommand) -> NavResult<()> {
        match command {
            RenderCommand::SetVisible { view, visible } => self.set_visible(view, *visible),
            RenderCommand::SetElementText { element, text } => {
                self.set_element_text(*element, text)
            }
            RenderCommand::SetButtonEnabled { button, enabled } => {
                self.set_button_enabled(*button, *enabled)
            }
            RenderCommand::SetMenuActive { menu_id, active } => {
                self.set_menu_active(menu_id, *active)
            }
            RenderCommand::RequestAnimation { target, kind } => {
                self.request_animation(target, *kind)
            }
        }
    }
}
