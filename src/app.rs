//! Application state and navigation logic for lode.
//!
//! - [state]: [AppState], modes and key press results
//! - [handlers]: the transitions applied for each [InputEvent]
//! - [nav]: current directory, listing, selection and history
//! - [content]: rendered file content and scrolling
//! - [editors]: the fixed editor list and the list row type
//! - [keymap]: key press to [InputEvent] mapping

pub mod content;
pub mod editors;
pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod state;

pub use content::ContentState;
pub use editors::{EDITORS, IdeDescriptor, ListRow};
pub use keymap::{InputEvent, Keymap};
pub use nav::NavState;
pub use state::{AppState, KeypressResult, Mode, Notice};
