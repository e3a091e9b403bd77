//! Block records shown in the "Recent Blocks" tab.

use serde::{Deserialize, Serialize};

/// A single block row. Lists are ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub number: u64,
    pub timestamp: String,
    /// Number of transactions in the block
    pub transactions: u32,
    pub miner: String,
    /// Block size in KB
    pub size_kb: u32,
    /// Block reward in ETH
    pub reward: f64,
}

impl BlockRecord {
    pub fn new(
        number: u64,
        timestamp: impl Into<String>,
        transactions: u32,
        miner: impl Into<String>,
        size_kb: u32,
        reward: f64,
    ) -> Self {
        Self {
            number,
            timestamp: timestamp.into(),
            transactions,
            miner: miner.into(),
            size_kb,
            reward,
        }
    }

    /// Case-insensitive match against block number and miner.
    pub fn matches(&self, needle_lower: &str) -> bool {
        let needle = needle_lower.trim_start_matches('#');
        self.number.to_string().contains(needle) || self.miner.to_lowercase().contains(needle)
    }
}

/// Index of the first block that breaks newest-first ordering, if any.
pub fn first_out_of_order(blocks: &[BlockRecord]) -> Option<usize> {
    blocks
        .windows(2)
        .position(|pair| pair[0].number <= pair[1].number)
        .map(|i| i + 1)
}
