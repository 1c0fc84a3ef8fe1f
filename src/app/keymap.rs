//! Key mapping for lode.
//!
//! Turns the key lists from `[keys]` into a lookup table from key presses to
//! [InputEvent]s, the only input the state machine understands.

use crate::config::Config;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Abstract input accepted by the navigation state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Activate,
    GoBack,
    RequestEditorSelection,
    Cancel,
    NavigateUp,
    NavigateDown,
    Resize(u16, u16),
}

/// Key + modifiers as used in the keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Stores the mapping from Key to input event, built from the config
pub struct Keymap {
    map: HashMap<Key, InputEvent>,
}

impl Keymap {
    #[rustfmt::skip]
    pub fn from_config(config: &Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        // Later bindings win when the same key appears twice.
        bind(keys.up(),            InputEvent::NavigateUp,             &mut map);
        bind(keys.down(),          InputEvent::NavigateDown,           &mut map);
        bind(keys.activate(),      InputEvent::Activate,               &mut map);
        bind(keys.go_back(),       InputEvent::GoBack,                 &mut map);
        bind(keys.editor_select(), InputEvent::RequestEditorSelection, &mut map);
        bind(keys.cancel(),        InputEvent::Cancel,                 &mut map);
        bind(keys.quit(),          InputEvent::Quit,                   &mut map);

        Keymap { map }
    }

    /// Looks up the input event for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<InputEvent> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(event) = self.map.get(&k).copied() {
            return Some(event);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Parses a binding such as "k", "Enter", "F5", "Ctrl+c", "Ctrl-c" or "<C-c>"
/// into a [Key]. Modifiers may be joined with either `+` or `-`.
pub(crate) fn parse_key(s: &str) -> Option<Key> {
    let s = s.trim();
    let input = s
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(s);

    // "+" and "-" on their own are keys, not separators.
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        });
    }

    let (prefix, last) = match input.strip_suffix(SEPARATORS) {
        Some(rest) if rest.ends_with(SEPARATORS) => {
            (&rest[..rest.len() - 1], &input[rest.len()..])
        }
        _ => match input.rfind(SEPARATORS) {
            Some(i) => (&input[..i], &input[i + 1..]),
            None => ("", input),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    if !prefix.is_empty() {
        for part in prefix.split(SEPARATORS) {
            modifiers |= parse_modifier(part)?;
        }
    }

    let code = match parse_code(last)? {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => {
            KeyCode::Char(c.to_ascii_uppercase())
        }
        code => code,
    };
    Some(Key { code, modifiers })
}

const SEPARATORS: [char; 2] = ['+', '-'];

fn parse_modifier(part: &str) -> Option<KeyModifiers> {
    match part.to_lowercase().as_str() {
        "c" | "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "a" | "m" | "alt" | "meta" => Some(KeyModifiers::ALT),
        "s" | "shift" => Some(KeyModifiers::SHIFT),
        _ => None,
    }
}

fn parse_code(part: &str) -> Option<KeyCode> {
    let lower = part.to_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" | "back" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" | "spc" => KeyCode::Char(' '),
        _ => {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => {
                    let n = lower.strip_prefix('f')?;
                    if n.is_empty() || !n.chars().all(|c| c.is_ascii_digit()) {
                        return None;
                    }
                    KeyCode::F(n.parse().ok()?)
                }
            }
        }
    };
    Some(code)
}

fn bind(key_list: &[String], event: InputEvent, map: &mut HashMap<Key, InputEvent>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, event);
            }
            None => tracing::warn!(key = %k, ?event, "ignoring unparsable key binding"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parse_key_forms() {
        let ctrl_c = parse_key("Ctrl+c");
        assert_eq!(
            ctrl_c,
            Some(Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(parse_key("<C-c>"), ctrl_c);
        assert_eq!(parse_key("Enter").map(|k| k.code), Some(KeyCode::Enter));
        assert_eq!(parse_key("F5").map(|k| k.code), Some(KeyCode::F(5)));
        assert_eq!(parse_key("Hyper+x"), None);
        assert_eq!(parse_key("Ctrl+"), None);
        assert_eq!(parse_key("Ctrl++c"), None);
    }

    #[test]
    fn dash_joins_modifiers_like_plus() {
        let ctrl_c = parse_key("Ctrl+c");
        assert_eq!(parse_key("Ctrl-c"), ctrl_c);
        assert_eq!(parse_key("ctrl-C").map(|k| k.modifiers), Some(KeyModifiers::CONTROL));
        assert_eq!(
            parse_key("Ctrl-Shift-x"),
            Some(Key {
                code: KeyCode::Char('X'),
                modifiers: KeyModifiers::CONTROL | KeyModifiers::SHIFT
            })
        );
        assert_eq!(parse_key("<C-S-x>"), parse_key("Ctrl-Shift-x"));
        assert_eq!(parse_key("Alt-Enter").map(|k| k.code), Some(KeyCode::Enter));
    }

    #[test]
    fn separators_bind_as_plain_keys() {
        assert_eq!(parse_key("-").map(|k| k.code), Some(KeyCode::Char('-')));
        assert_eq!(parse_key("+").map(|k| k.code), Some(KeyCode::Char('+')));
        assert_eq!(
            parse_key("Ctrl+-"),
            Some(Key {
                code: KeyCode::Char('-'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(parse_key("Ctrl--"), parse_key("Ctrl+-"));
    }

    #[test]
    fn dash_bindings_from_config_are_honoured() -> Result<(), Box<dyn std::error::Error>> {
        let raw: crate::config::RawConfig = toml::from_str("[keys]\ngo_back = [\"Ctrl-h\"]\n")?;
        let keymap = Keymap::from_config(&Config::from(raw));
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            Some(InputEvent::GoBack)
        );
        Ok(())
    }

    #[test]
    fn default_bindings_cover_every_event() {
        let keymap = Keymap::from_config(&Config::default());
        let none = KeyModifiers::NONE;

        assert_eq!(
            keymap.lookup(press(KeyCode::Char('q'), none)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Enter, none)),
            Some(InputEvent::Activate)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Backspace, none)),
            Some(InputEvent::GoBack)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            Some(InputEvent::GoBack)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            Some(InputEvent::RequestEditorSelection)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Esc, none)),
            Some(InputEvent::Cancel)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('k'), none)),
            Some(InputEvent::NavigateUp)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Down, none)),
            Some(InputEvent::NavigateDown)
        );
        assert_eq!(keymap.lookup(press(KeyCode::Char('z'), none)), None);
    }
}
