//! Error type shared by the browser core, the launcher and the terminal shell.
//!
//! Rendering problems never appear here: the content renderer absorbs them and
//! degrades to the raw file text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure that can leave a navigation transition or the editor hand-off.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// A directory could not be listed or a file could not be read.
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external editor could not be found or started.
    #[error("cannot launch '{tool}': {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// Editor selection was requested before any path was selected.
    #[error("no file or project selected yet")]
    NoSelection,

    /// Raw mode, alternate screen or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl BrowseError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BrowseError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn launch(tool: impl Into<String>, source: io::Error) -> Self {
        BrowseError::Launch {
            tool: tool.into(),
            source,
        }
    }

    /// Read errors are the only kind the session can survive.
    pub fn is_read(&self) -> bool {
        matches!(self, BrowseError::Read { .. })
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_mentions_path() {
        let err = BrowseError::read(
            "/no/such/dir",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_read());
        assert!(err.to_string().contains("/no/such/dir"));
    }

    #[test]
    fn launch_error_is_not_read() {
        let err = BrowseError::launch("code", io::Error::other("missing"));
        assert!(!err.is_read());
        assert!(err.to_string().contains("code"));
    }
}
