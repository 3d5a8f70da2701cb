//! Type definition module

mod catalog;
mod event;
mod render;
mod state;

pub use catalog::{Catalog, Item, Section, CONTACT_MENU, HOME_MENU};
pub use event::{Key, NavEvent};
pub use render::{AnimationKind, AnimationTarget, ButtonId, ElementId, RenderCommand, ViewId};
pub use state::{NavigationState, View};
