//! Theme configuration options for lode
//!
//! All styling lives in this value. It is built once from `lode.toml` and handed
//! to the content renderer (syntax theme name) and the UI (colors), so tests can
//! substitute a theme without touching global state.

use crate::core::render::DEFAULT_SYNTAX_THEME;
use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// syntax = "Solarized (dark)"
/// [theme.selection]
/// fg = "#50FA7B"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    syntax: String,
    title: ColorPair,
    item: ColorPair,
    description: ColorPair,
    selection: ColorPair,
    path: ColorPair,
    hint: ColorPair,
    error: ColorPair,
    selection_icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            syntax: DEFAULT_SYNTAX_THEME.into(),
            title: ColorPair {
                fg: Color::Rgb(0xFF, 0x79, 0xC6),
                ..ColorPair::default()
            },
            item: ColorPair::default(),
            description: ColorPair {
                fg: Color::Indexed(244),
                ..ColorPair::default()
            },
            selection: ColorPair {
                fg: Color::Rgb(0x50, 0xFA, 0x7B),
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            hint: ColorPair {
                fg: Color::Indexed(241),
                ..ColorPair::default()
            },
            error: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
            selection_icon: "▌".into(),
        }
    }
}

impl Theme {
    /// Name of the syntect theme for highlighted files.
    #[inline]
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    pub fn title_style(&self) -> Style {
        self.title.as_style().add_modifier(Modifier::BOLD)
    }

    pub fn item_style(&self) -> Style {
        self.item.as_style()
    }

    pub fn description_style(&self) -> Style {
        self.description.as_style()
    }

    pub fn selection_style(&self) -> Style {
        self.selection.as_style().add_modifier(Modifier::BOLD)
    }

    pub fn path_style(&self) -> Style {
        self.path.as_style()
    }

    pub fn hint_style(&self) -> Style {
        self.hint.as_style().add_modifier(Modifier::ITALIC)
    }

    pub fn error_style(&self) -> Style {
        self.error.as_style()
    }

    #[inline]
    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }
}

/// Foreground and background colors of one UI element.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub fn as_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_theme_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            syntax = "InspiredGitHub"
            [selection]
            fg = "#112233"
            "##,
        )?;
        assert_eq!(theme.syntax(), "InspiredGitHub");
        assert_eq!(theme.selection.fg, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.title, Theme::default().title);
        Ok(())
    }

    #[test]
    fn unknown_color_resets() -> Result<(), Box<dyn std::error::Error>> {
        let pair: ColorPair = toml::from_str(r#"fg = "not-a-color""#)?;
        assert_eq!(pair.fg, Color::Reset);
        assert_eq!(pair.bg, Color::Reset);
        Ok(())
    }
}
