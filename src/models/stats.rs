//! Network statistics snapshot.

use serde::{Deserialize, Serialize};

/// A point-in-time view of network telemetry.
///
/// Snapshots are replaced wholesale on every successful fetch; fields are
/// never merged from two different snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    /// Total transactions observed on the network
    pub total_transactions: u64,
    /// Addresses active in the current window
    pub active_addresses: u64,
    /// Network hashrate in TH/s
    pub network_hashrate: f64,
    /// Average block time in seconds
    pub avg_block_time: f64,
    /// Gas price in Gwei
    pub gas_price: u64,
    /// Market capitalisation in USD
    pub market_cap: f64,
}

impl StatisticsSnapshot {
    /// Check the numeric invariants of a snapshot received from a source.
    ///
    /// Integer fields cannot be negative by construction; the real-valued
    /// fields must be finite and non-negative, and the block time must be
    /// strictly positive.
    pub fn validate(&self) -> Result<(), String> {
        let reals = [
            ("networkHashrate", self.network_hashrate),
            ("avgBlockTime", self.avg_block_time),
            ("marketCap", self.market_cap),
        ];
        for (field, value) in reals {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", field, value));
            }
        }
        if self.avg_block_time <= 0.0 {
            return Err("avgBlockTime must be positive".to_string());
        }
        Ok(())
    }

    /// Whether this is the empty placeholder shown before the first fetch.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
