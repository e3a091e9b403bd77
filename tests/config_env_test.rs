//! Environment-driven configuration.
//!
//! These tests mutate process environment variables, so they run serially.

use std::time::Duration;

use blockdash::adapters::source_from_config;
use blockdash::config::{
    DashboardConfig, ENV_FETCH_TIMEOUT_MS, ENV_LOG_FILE, ENV_MANUAL_DELAY_MS,
    ENV_REFRESH_INTERVAL_MS, ENV_SIMULATED_LATENCY_MS, ENV_SNAPSHOT_URL,
};
use blockdash::error::DashboardError;
use serial_test::serial;

const ALL_KEYS: [&str; 6] = [
    ENV_REFRESH_INTERVAL_MS,
    ENV_MANUAL_DELAY_MS,
    ENV_SNAPSHOT_URL,
    ENV_FETCH_TIMEOUT_MS,
    ENV_SIMULATED_LATENCY_MS,
    ENV_LOG_FILE,
];

/// Clears every blockdash variable on creation and again on drop.
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        for key in ALL_KEYS {
            std::env::remove_var(key);
        }
        EnvGuard
    }

    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in ALL_KEYS {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    let _env = EnvGuard::new();

    let config = DashboardConfig::from_env().unwrap();

    assert_eq!(config.refresh_interval, Duration::from_secs(30));
    assert_eq!(config.manual_refresh_delay, Duration::from_secs(1));
    assert!(config.snapshot_url.is_none());
    assert_eq!(source_from_config(&config).name(), "simulated");
}

#[test]
#[serial]
fn test_environment_overrides() {
    let env = EnvGuard::new();
    env.set(ENV_REFRESH_INTERVAL_MS, "5000");
    env.set(ENV_MANUAL_DELAY_MS, "250");
    env.set(ENV_SNAPSHOT_URL, "http://127.0.0.1:8080/stats");
    env.set(ENV_FETCH_TIMEOUT_MS, "1500");

    let config = DashboardConfig::from_env().unwrap();

    assert_eq!(config.refresh_interval, Duration::from_secs(5));
    assert_eq!(config.manual_refresh_delay, Duration::from_millis(250));
    assert_eq!(config.fetch_timeout, Duration::from_millis(1500));
    assert_eq!(source_from_config(&config).name(), "http");
}

#[test]
#[serial]
fn test_zero_refresh_interval_is_rejected() {
    let env = EnvGuard::new();
    env.set(ENV_REFRESH_INTERVAL_MS, "0");

    let err = DashboardConfig::from_env().unwrap_err();

    assert!(matches!(err, DashboardError::Config { ref key, .. } if key == ENV_REFRESH_INTERVAL_MS));
}

#[test]
#[serial]
fn test_non_numeric_delay_is_rejected() {
    let env = EnvGuard::new();
    env.set(ENV_MANUAL_DELAY_MS, "one second");

    assert!(DashboardConfig::from_env().is_err());
}

#[test]
#[serial]
fn test_log_file_override() {
    let env = EnvGuard::new();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dash.log");
    env.set(ENV_LOG_FILE, path.to_str().unwrap());

    let config = DashboardConfig::from_env().unwrap();

    assert_eq!(
        blockdash::logging::resolve_log_path(&config).unwrap(),
        path
    );
}
