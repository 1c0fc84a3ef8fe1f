//! Helpers for lode.
//!
//! - Color parsing from names, hex codes or 256-color indexes
//! - Home directory lookup, `~` expansion and shortening
//! - Stack-buffered lowercasing for map lookups
//! - Width-aware truncation for list rows

use ratatui::style::Color;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Parses a string (color name, hex or 256-color index) into a ratatui Color
///
/// Supports standard names (red, green, etc.), hex values (#RRGGBB or #RGB)
/// and indexes such as "241".
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        lowered => {
            if let Ok(idx) = lowered.parse::<u8>() {
                return Color::Indexed(idx);
            }
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Home directory of the current user, if known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path
        .strip_prefix("~/")
        .or_else(|| path.strip_prefix("~\\"))
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Shortens the home directory prefix of a path to `~` for display.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Runs `f` with an ASCII-lowercased copy of `s`.
///
/// Short strings are lowered on the stack; longer or non-ASCII ones allocate.
pub fn with_lowered_stack<R>(s: &str, f: impl FnOnce(&str) -> R) -> R {
    const CAP: usize = 32;
    if s.len() <= CAP && s.is_ascii() {
        let mut buf = [0u8; CAP];
        let bytes = &mut buf[..s.len()];
        bytes.copy_from_slice(s.as_bytes());
        bytes.make_ascii_lowercase();
        // ASCII input stays valid UTF-8 after lowercasing
        match std::str::from_utf8(bytes) {
            Ok(lowered) => f(lowered),
            Err(_) => f(&s.to_lowercase()),
        }
    } else {
        f(&s.to_lowercase())
    }
}

/// Truncates `s` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(width + 3);
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
