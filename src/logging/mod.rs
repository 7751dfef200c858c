// Diagnostic logging
//
// The terminal belongs to the query screen, so tracing output goes to an
// append-only log file. RUST_LOG controls the filter (default: info).
// Records emitted through the `log` crate (reqwest, hyper) are bridged in.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::constants::{APP_DIR_NAME, LOG_FILE_NAME};

const DEFAULT_FILTER: &str = "info";

/// ~/.madslang/madslang.log
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `path`. Returns the path used.
pub fn init_logging(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path().context("Could not determine home directory")?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing_log::LogTracer::init().context("Failed to install log bridge")?;
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
