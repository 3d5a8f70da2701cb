//! Render layer abstraction trait definition

mod render_target;

pub use render_target::RenderTarget;
