//! The main config loading module for lode.
//!
//! Handles loading and deserializing settings from `lode.toml` into the [Config]
//! struct, and writing a default file for `lode --init`.

use crate::config::{General, InternalGeneral, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{info, warn};

/// Raw configuration as read from the toml file
/// It is converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for lode, fixed for the whole session.
#[derive(Debug, Clone)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("[lode] Error parsing config {}: {}", path.display(), e);
                    warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Returns the config with its root replaced, used for the `lode PATH` form.
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.general.set_root(root);
        self
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// `LODE_CONFIG` first, then `XDG_CONFIG_HOME`, then `~/.config/lode/lode.toml`.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LODE_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lode/lode.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lode/lode.toml");
        }
        PathBuf::from("lode.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# lode.toml - default configuration for lode
#
# Commented values are the internal defaults.
# Colors are hex codes ("#RRGGBB") or terminal color names ("cyan").

[general]
# Directory the browser opens in. Defaults to ~/Projects, or the current directory.
# root = "~/Projects"
# End the session when a directory or file cannot be read.
# fatal_read_errors = false

[theme]
# Any theme bundled with syntect, e.g. "base16-ocean.dark", "Solarized (dark)", "InspiredGitHub".
# syntax = "base16-ocean.dark"
# selection_icon = "▌"
# title.fg = "#FF79C6"
# selection.fg = "#50FA7B"
# description.fg = "244"
# path.fg = "magenta"
# hint.fg = "241"
# error.fg = "red"

[keys]
# Keys are names ("Enter", "Esc", "Up", "Backspace", "Tab", "Space", "F5") or
# single characters. Modifiers (Ctrl, Alt, Shift) join with "+" or "-":
# "Ctrl+c", "Ctrl-c" and "<C-c>" are the same binding.
# quit = ["Ctrl+c", "q"]
# activate = ["Enter"]
# go_back = ["Ctrl+b", "Backspace"]
# editor_select = ["Ctrl+o", "Ctrl+g"]
# cancel = ["Esc"]
# up = ["k", "Up"]
# down = ["j", "Down"]
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_toml_parses() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str(DEFAULT_TOML)?;
        let config = Config::from(raw);
        assert!(!config.general().fatal_read_errors());
        assert_eq!(config.keys().activate(), ["Enter".to_string()]);
        Ok(())
    }

    #[test]
    fn sections_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str(
            r#"
            [general]
            root = "/opt/projects"
            fatal_read_errors = true

            [keys]
            quit = ["x"]
            "#,
        )?;
        let config = Config::from(raw);
        assert_eq!(config.general().root(), Path::new("/opt/projects"));
        assert!(config.general().fatal_read_errors());
        assert_eq!(config.keys().quit(), ["x".to_string()]);
        assert_eq!(config.keys().cancel(), ["Esc".to_string()]);
        Ok(())
    }

    #[test]
    fn with_root_overrides() {
        let config = Config::default().with_root(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(config.general().root(), Path::new("/tmp/elsewhere"));
    }

    #[test]
    fn generate_default_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/lode.toml");
        Config::generate_default(&path)?;
        assert!(path.exists());
        let err = Config::generate_default(&path).err().ok_or("expected error")?;
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        Ok(())
    }
}
