//! Editor hand-off for lode.
//!
//! Launching an editor ends the browsing session, so the process launcher
//! gives the terminal back before the child starts and does not reclaim it.

use crate::error::{BrowseError, Result};

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Spawns an external tool against a path.
pub trait EditorLauncher {
    /// Starts `tool` with `target` as its only argument.
    ///
    /// # Errors
    /// [BrowseError::Launch] when the tool cannot be found or started. The
    /// child's exit status is not an error.
    fn launch(&mut self, tool: &str, target: &Path) -> Result<()>;
}

/// Launches real processes, inheriting stdout and stderr.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Leaves raw mode and the alternate screen so the child owns the terminal.
    fn release_terminal() -> io::Result<()> {
        use crossterm::{
            cursor::Show,
            execute,
            terminal::{LeaveAlternateScreen, disable_raw_mode},
        };

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, Show)
    }
}

impl EditorLauncher for ProcessLauncher {
    fn launch(&mut self, tool: &str, target: &Path) -> Result<()> {
        let program = which::which(tool).map_err(|e| {
            BrowseError::launch(tool, io::Error::new(io::ErrorKind::NotFound, e.to_string()))
        })?;

        Self::release_terminal()?;

        info!(tool, target = %target.display(), "launching editor");
        let status = Command::new(&program)
            .arg(target)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BrowseError::launch(tool, e))?;

        if !status.success() {
            warn!(tool, %status, "editor exited unsuccessfully");
        }
        Ok(())
    }
}
