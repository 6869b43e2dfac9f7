//! File-backed tracing setup.
//!
//! The terminal UI owns stdout, so diagnostics go to a log file under the
//! application data directory. The level is controlled through the
//! `SITESEARCH_LOG` environment variable (standard `tracing` filter syntax),
//! defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "sitesearch.log";
const FILTER_ENV: &str = "SITESEARCH_LOG";

/// Install the global tracing subscriber.
///
/// Safe to call once per process; later calls fail because the global
/// subscriber is already set, which callers can treat as fatal since this
/// runs before anything else in `main`.
pub fn initialize() -> Result<()> {
    let dir = crate::app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(())
}
