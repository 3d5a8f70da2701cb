//! Portfolio Navigation Core Library
//!
//! Provides the view-state logic of the portfolio site, including:
//! - Static content catalog (sections and their items)
//! - Navigation state machine (Home / Submenu / Detail / Contact)
//! - Render commands and the render target abstraction
//!
//! The state machine is a pure function of `(state, catalog, event)`; the
//! [`NavigationController`] applies its output to any [`RenderTarget`]
//! (a terminal surface, a DOM bridge, a recording mock in tests).

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{NavError, NavResult};
pub use services::{render_commands, transition, Dispatch, NavigationController, Transition};
pub use traits::RenderTarget;
pub use types::{
    AnimationKind, AnimationTarget, ButtonId, Catalog, ElementId, Item, Key, NavEvent,
    NavigationState, RenderCommand, Section, View, ViewId, CONTACT_MENU, HOME_MENU,
};
