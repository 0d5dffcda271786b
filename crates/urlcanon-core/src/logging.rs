//! Tracing setup for the `urlcanon` binary.
//!
//! Events go to `~/.local/state/urlcanon/urlcanon.log`; when that file cannot
//! be opened the caller switches to [`init_logging_stderr`]. `RUST_LOG`
//! replaces the verbosity-derived directives entirely.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "urlcanon.log";

/// Filter directives for `-v` repeated `verbose` times.
///
/// Third-party targets stay at `warn`; only the binary (`urlcanon`) and the
/// library (`urlcanon_core`) targets get louder: `info`, then `debug`, then `trace`.
pub fn default_directives(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,urlcanon={level},urlcanon_core={level}")
}

fn env_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Path of the log file, creating the state directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_state_file(LOG_FILE)?)
}

/// Installs the global subscriber appending to [`log_file_path`].
///
/// Returns the log path. Errors leave no subscriber installed.
pub fn init_logging(verbose: u8) -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing::subscriber::set_global_default(subscriber(env_filter(verbose), Mutex::new(file)))
        .context("install subscriber")?;
    tracing::debug!(path = %path.display(), "file logging ready");
    Ok(path)
}

/// Installs a stderr subscriber; a no-op if one is already set.
pub fn init_logging_stderr(verbose: u8) {
    let _ = tracing::subscriber::set_global_default(subscriber(env_filter(verbose), io::stderr));
}
