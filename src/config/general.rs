//! The general configuration settings for lode.
//!
//! [General] is deserialized from `lode.toml`; [InternalGeneral] is the resolved
//! form the browser uses (home expanded, root chosen).

use crate::utils::{expand_home_path, get_home};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory under the home directory used as the root when none is configured.
const DEFAULT_PROJECTS_DIR: &str = "Projects";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct General {
    root: Option<String>,
    fatal_read_errors: bool,
}

#[derive(Debug, Clone)]
pub struct InternalGeneral {
    root: PathBuf,
    fatal_read_errors: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let root = match g.root.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() => expand_home_path(r),
            _ => default_root(),
        };
        Self {
            root,
            fatal_read_errors: g.fatal_read_errors,
        }
    }
}

impl InternalGeneral {
    /// Root directory the browser starts in.
    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a failed directory or file read ends the session.
    #[inline]
    pub fn fatal_read_errors(&self) -> bool {
        self.fatal_read_errors
    }

    pub(crate) fn set_root(&mut self, root: PathBuf) {
        self.root = root;
    }
}

/// `~/Projects` when it exists, otherwise the current directory.
fn default_root() -> PathBuf {
    if let Some(home) = get_home() {
        let projects = home.join(DEFAULT_PROJECTS_DIR);
        if projects.is_dir() {
            return projects;
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
