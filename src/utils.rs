//! Miscellaneous utility functions for lode.
//!
//! - [cli]: argument parsing and help text
//! - [helpers]: color parsing, home path handling, lowercasing and truncation

pub mod cli;
pub mod helpers;

pub use helpers::{
    expand_home_path, get_home, parse_color, shorten_home_path, truncate_to_width,
    with_lowered_stack,
};
