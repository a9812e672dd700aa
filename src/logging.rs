//! Logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`. The filter is
//! read from `DOCHUNT_LOG` when set, otherwise from the configured default.
//! While the terminal form owns the screen, output goes to a log file instead
//! of stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DOCHUNT_LOG";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for command line use
    Stderr,
    /// Append to a file, for the terminal form
    File(PathBuf),
}

/// Build the filter from the environment, falling back to `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize the global subscriber
pub fn init_logging(default_filter: &str, target: LogTarget) -> Result<()> {
    let env_filter = build_filter(default_filter);

    match &target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_line_number(true)
                        .with_filter(env_filter),
                )
                .try_init()?;
        }
    }

    tracing::debug!(target_kind = ?target, "logging initialized");
    Ok(())
}
