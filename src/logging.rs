//! Tracing setup.
//!
//! The terminal UI owns stdout/stderr while it runs, so logs go to a file in
//! the config directory. Without `--log` no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::branding::{LOG_ENV_VAR, LOG_FILE_NAME};
use crate::config::Config;

/// Default filter when neither `FOLIO_LOG` nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "folio=info";

/// Default log file location inside the config directory.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(LOG_FILE_NAME))
}

/// Builds the filter from `FOLIO_LOG`, then `RUST_LOG`, then the default.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Installs a global subscriber appending to `path`.
pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "Logging initialised");
    Ok(())
}
