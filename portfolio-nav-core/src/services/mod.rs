//! Navigation logic layer

mod controller;
mod machine;
mod projection;

pub use controller::{Dispatch, NavigationController};
pub use machine::{transition, Transition};
pub use projection::{all_views, render_commands, view_id};
