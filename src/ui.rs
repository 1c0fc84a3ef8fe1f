//! Terminal UI for lode.
//!
//! - [render]: the top-level `render` entry point and the screen layout.
//! - [panes]: the list view and the content view.
//! - [widgets]: the header, hint footer and notice popup.

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::render;
