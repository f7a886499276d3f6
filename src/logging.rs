use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE: &str = "mybooks.log";

/// Where diagnostics go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The TUI owns the terminal, so it always logs to a file: the given one,
    /// or `mybooks.log` in the system temp directory.
    pub fn for_tui(log_file: Option<PathBuf>) -> Self {
        LogTarget::File(log_file.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE)))
    }

    pub fn for_cli(log_file: Option<PathBuf>) -> Self {
        log_file.map(LogTarget::File).unwrap_or(LogTarget::Stderr)
    }
}

/// `filter` takes `RUST_LOG` syntax; without it `RUST_LOG` is read, then
/// `info`.
fn env_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

pub fn init(target: &LogTarget, filter: Option<&str>) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter(filter))
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
            .context("init stderr logging"),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(filter))
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
                .context("init file logging")
        }
    }
}
