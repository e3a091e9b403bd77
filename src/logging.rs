//! File logging for the dashboard.
//!
//! The TUI owns stdout, so the fmt subscriber writes to a log file instead.
//! `RUST_LOG` overrides the default `blockdash=info` filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{DashboardConfig, ENV_LOG_FILE};
use crate::error::{DashboardError, DashboardResult};

const DEFAULT_FILTER: &str = "blockdash=info";
const LOG_FILE_NAME: &str = "blockdash.log";

/// `<data_local_dir>/blockdash/blockdash.log`, if the platform has a data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("blockdash").join(LOG_FILE_NAME))
}

/// The configured log file, falling back to [`default_log_path`].
pub fn resolve_log_path(config: &DashboardConfig) -> DashboardResult<PathBuf> {
    config
        .log_file
        .clone()
        .or_else(default_log_path)
        .ok_or_else(|| DashboardError::Config {
            key: ENV_LOG_FILE.to_string(),
            message: "no local data directory; set a log file path".to_string(),
        })
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> DashboardResult<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global subscriber. Returns the path being written to.
///
/// A second call keeps the first subscriber and still returns the path.
pub fn init_logging(config: &DashboardConfig) -> DashboardResult<PathBuf> {
    let path = resolve_log_path(config)?;
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), "Logging initialized");
    }
    Ok(path)
}
