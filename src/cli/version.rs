//! Version and usage text.

use crate::config::{
    ENV_FETCH_TIMEOUT_MS, ENV_LOG_FILE, ENV_MANUAL_DELAY_MS, ENV_REFRESH_INTERVAL_MS,
    ENV_SIMULATED_LATENCY_MS, ENV_SNAPSHOT_URL,
};

/// Read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("blockdash {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{version}
Terminal dashboard for blockchain network statistics

USAGE:
    blockdash [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version

ENVIRONMENT:
    {interval:<32} Auto refresh period in ms (default 30000)
    {delay:<32} Manual refresh delay in ms (default 1000)
    {url:<32} Snapshot endpoint; simulated data when unset
    {timeout:<32} HTTP fetch timeout in ms (default 10000)
    {latency:<32} Simulated source latency in ms (default 300)
    {log:<32} Log file path
    RUST_LOG                         Log filter (default blockdash=info)",
        version = version_line(),
        interval = ENV_REFRESH_INTERVAL_MS,
        delay = ENV_MANUAL_DELAY_MS,
        url = ENV_SNAPSHOT_URL,
        timeout = ENV_FETCH_TIMEOUT_MS,
        latency = ENV_SIMULATED_LATENCY_MS,
        log = ENV_LOG_FILE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("blockdash "));
    }

    #[test]
    fn test_usage_lists_flags_and_env() {
        let text = usage();
        assert!(text.contains("--version"));
        assert!(text.contains("--help"));
        assert!(text.contains(ENV_REFRESH_INTERVAL_MS));
        assert!(text.contains(ENV_LOG_FILE));
    }
}
