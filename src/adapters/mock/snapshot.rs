//! Scripted snapshot source for testing.
//!
//! Returns a predefined sequence of results and records how many fetches were
//! issued, so tests can assert both what the store shows and how often the
//! scheduler reached the source.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::StatisticsSnapshot;
use crate::traits::SnapshotSource;

/// Mock snapshot source.
///
/// Results are served in order. Once the script is exhausted every further
/// call returns [`ScriptedSource::fallback`]. Clones share the same script
/// and counters.
///
/// # Example
///
/// ```ignore
/// use blockdash::adapters::mock::ScriptedSource;
///
/// let source = ScriptedSource::new()
///     .then_gas_price(50)
///     .then_gas_price(61);
/// assert_eq!(source.fetch_snapshot().await?.gas_price, 50);
/// assert_eq!(source.calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<Result<StatisticsSnapshot, FetchError>>>>,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
        }
    }

    /// Make every fetch take `delay` before resolving.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queue a successful snapshot.
    pub fn then_snapshot(self, snapshot: StatisticsSnapshot) -> Self {
        self.push(Ok(snapshot));
        self
    }

    /// Queue a snapshot that differs from [`sample_snapshot`] only in gas price.
    pub fn then_gas_price(self, gas_price: u64) -> Self {
        self.then_snapshot(StatisticsSnapshot {
            gas_price,
            ..sample_snapshot()
        })
    }

    /// Queue a failure.
    pub fn then_error(self, error: FetchError) -> Self {
        self.push(Err(error));
        self
    }

    /// Append a result to the script.
    pub fn push(&self, result: Result<StatisticsSnapshot, FetchError>) {
        self.script
            .lock()
            .expect("script lock poisoned")
            .push_back(result);
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Result returned once the script runs out.
    pub fn fallback() -> Result<StatisticsSnapshot, FetchError> {
        Ok(sample_snapshot())
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn fetch_snapshot(&self) -> Result<StatisticsSnapshot, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .expect("script lock poisoned")
            .pop_front();
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        next.unwrap_or_else(Self::fallback)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// A valid snapshot used as the base for scripted values.
pub fn sample_snapshot() -> StatisticsSnapshot {
    StatisticsSnapshot {
        total_transactions: 1_456_789,
        active_addresses: 89_234,
        network_hashrate: 245.6,
        avg_block_time: 12.3,
        gas_price: 45,
        market_cap: 425_000_000_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_order_then_fallback() {
        let source = ScriptedSource::new()
            .then_gas_price(50)
            .then_error(FetchError::HttpStatus { status: 500 });

        assert_eq!(source.fetch_snapshot().await.unwrap().gas_price, 50);
        assert!(source.fetch_snapshot().await.is_err());
        assert_eq!(source.fetch_snapshot().await.unwrap(), sample_snapshot());
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let source = ScriptedSource::new();
        let clone = source.clone();
        clone.push(Ok(StatisticsSnapshot {
            gas_price: 99,
            ..sample_snapshot()
        }));
        assert_eq!(source.fetch_snapshot().await.unwrap().gas_price, 99);
        assert_eq!(clone.calls(), 1);
    }
}
