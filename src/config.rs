//! Configuration for lode.
//!
//! - [load]: reads `lode.toml` into [Config].
//! - [general]: root directory and error policy.
//! - [input]: key lists per input event.
//! - [theme]: syntax theme and UI colors.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub(crate) use general::General;
pub use general::InternalGeneral;
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use theme::{ColorPair, Theme};
