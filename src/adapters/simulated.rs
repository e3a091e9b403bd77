//! Simulated telemetry source.
//!
//! Produces plausible, slowly varying network statistics without touching the
//! network. Counters jitter upward from fixed baselines on every call.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::error::FetchError;
use crate::models::StatisticsSnapshot;
use crate::traits::SnapshotSource;

/// Baseline transaction count before jitter
pub const BASE_TOTAL_TRANSACTIONS: u64 = 1_456_789;
/// Baseline active address count before jitter
pub const BASE_ACTIVE_ADDRESSES: u64 = 89_234;
/// Baseline gas price (Gwei) before jitter
pub const BASE_GAS_PRICE: u64 = 45;

const TOTAL_TRANSACTIONS_JITTER: u64 = 1_000;
const ACTIVE_ADDRESSES_JITTER: u64 = 100;
const GAS_PRICE_JITTER: u64 = 20;

const NETWORK_HASHRATE: f64 = 245.6;
const AVG_BLOCK_TIME: f64 = 12.3;
const MARKET_CAP: f64 = 425_000_000_000.0;

/// Snapshot source backed by a random generator.
///
/// Never fails. An optional latency makes the asynchronous boundary visible.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSource {
    latency: Duration,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every fetch by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Draw one snapshot from `rng`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> StatisticsSnapshot {
        StatisticsSnapshot {
            total_transactions: BASE_TOTAL_TRANSACTIONS + rng.gen_range(0..TOTAL_TRANSACTIONS_JITTER),
            active_addresses: BASE_ACTIVE_ADDRESSES + rng.gen_range(0..ACTIVE_ADDRESSES_JITTER),
            network_hashrate: NETWORK_HASHRATE,
            avg_block_time: AVG_BLOCK_TIME,
            gas_price: BASE_GAS_PRICE + rng.gen_range(0..GAS_PRICE_JITTER),
            market_cap: MARKET_CAP,
        }
    }
}

#[async_trait]
impl SnapshotSource for SimulatedSource {
    async fn fetch_snapshot(&self) -> Result<StatisticsSnapshot, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let snapshot = Self::sample(&mut rand::thread_rng());
        tracing::trace!(gas_price = snapshot.gas_price, "Simulated snapshot generated");
        Ok(snapshot)
    }

    fn name(&self) -> &str {
        "simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let s = SimulatedSource::sample(&mut rng);
            assert!((BASE_TOTAL_TRANSACTIONS..BASE_TOTAL_TRANSACTIONS + 1_000)
                .contains(&s.total_transactions));
            assert!((BASE_ACTIVE_ADDRESSES..BASE_ACTIVE_ADDRESSES + 100).contains(&s.active_addresses));
            assert!((45..65).contains(&s.gas_price));
            assert!(s.validate().is_ok());
        }
    }

    #[test]
    fn test_fixed_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = SimulatedSource::sample(&mut rng);
        assert_eq!(s.network_hashrate, 245.6);
        assert_eq!(s.avg_block_time, 12.3);
        assert_eq!(s.market_cap, 425_000_000_000.0);
    }

    #[tokio::test]
    async fn test_fetch_never_fails() {
        let source = SimulatedSource::new();
        for _ in 0..10 {
            assert!(source.fetch_snapshot().await.is_ok());
        }
        assert_eq!(source.name(), "simulated");
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let source = SimulatedSource::new().with_latency(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        source.fetch_snapshot().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
