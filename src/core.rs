//! Core runtime logic for lode.
//!
//! This module contains the non-UI engine pieces used by the application:
//! - [classify]: extension to icon and language tag.
//! - [fm]: directory listing into classified [Entry] values (see [list_dir]).
//! - [render]: file content to styled terminal text behind [ContentRenderer].
//! - [launch]: editor hand-off behind [EditorLauncher].
//! - [projects]: the project overview printed by `--projects`.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.

pub mod classify;
pub mod fm;
pub mod launch;
pub mod projects;
pub mod render;
pub mod terminal;

pub use classify::{FILE_ICON, FOLDER_ICON, classify, classify_dir};
pub use fm::{Entry, EntryKind, list_dir};
pub use launch::{EditorLauncher, ProcessLauncher};
pub use projects::{Project, list_projects};
pub use render::{ContentRenderer, SyntectRenderer};
pub use terminal::run_terminal;
