//! Dashboard configuration.
//!
//! Defaults can be overridden through `BLOCKDASH_*` environment variables or
//! the builder methods.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BLOCKDASH_REFRESH_INTERVAL_MS` | auto-refresh period | 30000 |
//! | `BLOCKDASH_MANUAL_DELAY_MS` | minimum visible manual refresh | 1000 |
//! | `BLOCKDASH_SNAPSHOT_URL` | fetch snapshots over HTTP | unset (simulated) |
//! | `BLOCKDASH_FETCH_TIMEOUT_MS` | HTTP request timeout | 10000 |
//! | `BLOCKDASH_SIMULATED_LATENCY_MS` | simulated fetch latency | 300 |
//! | `BLOCKDASH_LOG_FILE` | log file path | `<data dir>/blockdash/blockdash.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};

/// Auto-refresh period
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(30_000);
/// Minimum time the manual refresh indicator stays visible
pub const DEFAULT_MANUAL_REFRESH_DELAY: Duration = Duration::from_millis(1_000);
/// Timeout for HTTP snapshot requests
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Latency of the simulated source
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(300);

pub const ENV_REFRESH_INTERVAL_MS: &str = "BLOCKDASH_REFRESH_INTERVAL_MS";
pub const ENV_MANUAL_DELAY_MS: &str = "BLOCKDASH_MANUAL_DELAY_MS";
pub const ENV_SNAPSHOT_URL: &str = "BLOCKDASH_SNAPSHOT_URL";
pub const ENV_FETCH_TIMEOUT_MS: &str = "BLOCKDASH_FETCH_TIMEOUT_MS";
pub const ENV_SIMULATED_LATENCY_MS: &str = "BLOCKDASH_SIMULATED_LATENCY_MS";
pub const ENV_LOG_FILE: &str = "BLOCKDASH_LOG_FILE";

/// Runtime settings for the dashboard.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use blockdash::config::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_refresh_interval(Duration::from_secs(5))?
///     .with_snapshot_url("http://localhost:8080/stats");
/// assert_eq!(config.refresh_interval, Duration::from_secs(5));
/// # Ok::<(), blockdash::error::DashboardError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Period of the auto-refresh timer
    pub refresh_interval: Duration,
    /// Delay before a manual refresh issues its fetch
    pub manual_refresh_delay: Duration,
    /// HTTP endpoint for snapshots; `None` selects the simulated source
    pub snapshot_url: Option<String>,
    /// Per-request timeout for the HTTP source
    pub fetch_timeout: Duration,
    /// Artificial latency of the simulated source
    pub simulated_latency: Duration,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            manual_refresh_delay: DEFAULT_MANUAL_REFRESH_DELAY,
            snapshot_url: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> DashboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> DashboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_millis(&lookup, ENV_REFRESH_INTERVAL_MS, false)? {
            config.refresh_interval = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_MANUAL_DELAY_MS, true)? {
            config.manual_refresh_delay = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_FETCH_TIMEOUT_MS, false)? {
            config.fetch_timeout = ms;
        }
        if let Some(ms) = parse_millis(&lookup, ENV_SIMULATED_LATENCY_MS, true)? {
            config.simulated_latency = ms;
        }
        if let Some(url) = lookup(ENV_SNAPSHOT_URL).filter(|v| !v.trim().is_empty()) {
            let url = url.trim().to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(DashboardError::Config {
                    key: ENV_SNAPSHOT_URL.to_string(),
                    message: format!("expected an http(s) URL, got {:?}", url),
                });
            }
            config.snapshot_url = Some(url);
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the settings that have no usable zero value.
    ///
    /// The refresh interval and the fetch timeout must both be non-zero. A
    /// zero manual delay or simulated latency is fine.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] naming the offending variable.
    pub fn validate(&self) -> DashboardResult<()> {
        require_non_zero(ENV_REFRESH_INTERVAL_MS, self.refresh_interval)?;
        require_non_zero(ENV_FETCH_TIMEOUT_MS, self.fetch_timeout)?;
        Ok(())
    }

    /// Set the auto-refresh period.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] when `interval` is zero.
    pub fn with_refresh_interval(mut self, interval: Duration) -> DashboardResult<Self> {
        require_non_zero(ENV_REFRESH_INTERVAL_MS, interval)?;
        self.refresh_interval = interval;
        Ok(self)
    }

    pub fn with_manual_refresh_delay(mut self, delay: Duration) -> Self {
        self.manual_refresh_delay = delay;
        self
    }

    pub fn with_snapshot_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] when `timeout` is zero.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> DashboardResult<Self> {
        require_non_zero(ENV_FETCH_TIMEOUT_MS, timeout)?;
        self.fetch_timeout = timeout;
        Ok(self)
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }
}

/// Reject a zero duration for `key`.
pub(crate) fn require_non_zero(key: &str, value: Duration) -> DashboardResult<()> {
    if value.is_zero() {
        return Err(DashboardError::Config {
            key: key.to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn parse_millis<F>(lookup: &F, key: &str, allow_zero: bool) -> DashboardResult<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let ms: u64 = raw.trim().parse().map_err(|_| DashboardError::Config {
        key: key.to_string(),
        message: format!("expected milliseconds, got {:?}", raw),
    })?;
    let value = Duration::from_millis(ms);
    if !allow_zero {
        require_non_zero(key, value)?;
    }
    Ok(Some(value))
}
