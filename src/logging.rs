//! Tracing setup for lode.
//!
//! The TUI owns the terminal, so events go to `lode.log` in the state directory
//! instead of stderr. The filter is read from `LODE_LOG` (default `info`).

use std::path::PathBuf;
use std::{fs, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "LODE_LOG";
const LOG_FILE: &str = "lode.log";

/// Directory the log file is written to.
///
/// `$XDG_STATE_HOME/lode`, then `~/.local/state/lode`, then the temp dir.
pub fn log_dir() -> PathBuf {
    if let Ok(state) = std::env::var("XDG_STATE_HOME")
        && !state.is_empty()
    {
        return PathBuf::from(state).join("lode");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".local/state/lode");
    }
    std::env::temp_dir().join("lode")
}

/// Installs the global subscriber. Call once near the start of `main`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// the background writer.
pub fn init_tracing() -> io::Result<WorkerGuard> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}
