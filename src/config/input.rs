//! Input configuration options for lode
//!
//! Each browser event can be bound to any number of keys in `[keys]`.

use serde::Deserialize;

/// Key lists for every input event
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Keys {
    quit: Vec<String>,
    activate: Vec<String>,
    go_back: Vec<String>,
    editor_select: Vec<String>,
    cancel: Vec<String>,
    up: Vec<String>,
    down: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(quit, activate, go_back, editor_select, cancel, up, down);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            quit: vec!["Ctrl+c".into(), "q".into()],
            activate: vec!["Enter".into()],
            go_back: vec!["Ctrl+b".into(), "Backspace".into()],
            editor_select: vec!["Ctrl+o".into(), "Ctrl+g".into()],
            cancel: vec!["Esc".into()],
            up: vec!["k".into(), "Up".into()],
            down: vec!["j".into(), "Down".into()],
        }
    }
}
