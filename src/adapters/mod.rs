//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`SimulatedSource`] - random-walk telemetry, no network access
//! - [`HttpSnapshotSource`] - telemetry fetched as JSON over HTTP
//!
//! The [`mock`] submodule provides test doubles.

pub mod mock;
pub mod reqwest_snapshot;
pub mod simulated;

pub use mock::ScriptedSource;
pub use reqwest_snapshot::HttpSnapshotSource;
pub use simulated::SimulatedSource;

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::traits::SnapshotSource;

/// Pick the snapshot source described by `config`.
///
/// A configured snapshot URL selects the HTTP source; otherwise the simulated
/// source is used.
pub fn source_from_config(config: &DashboardConfig) -> Arc<dyn SnapshotSource> {
    match config.snapshot_url.as_deref() {
        Some(url) => Arc::new(HttpSnapshotSource::new(url).with_timeout(config.fetch_timeout)),
        None => Arc::new(SimulatedSource::new().with_latency(config.simulated_latency)),
    }
}
