//! Transaction records shown in the "Recent Transactions" tab.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Settlement status of a transaction.
///
/// Anything the source reports outside the known set lands in
/// [`TxStatus::Unrecognized`] so rendering stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Confirmed,
    Pending,
    Failed,
    #[serde(other)]
    Unrecognized,
}

impl TxStatus {
    /// Lowercase label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Confirmed => "confirmed",
            TxStatus::Pending => "pending",
            TxStatus::Failed => "failed",
            TxStatus::Unrecognized => "unknown",
        }
    }
}

impl FromStr for TxStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => TxStatus::Confirmed,
            "pending" => TxStatus::Pending,
            "failed" => TxStatus::Failed,
            _ => TxStatus::Unrecognized,
        })
    }
}

/// A single transaction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction hash, unique within the displayed list
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Transferred value (ETH or USDC, see `ui::format::tx_value_unit`)
    pub value: f64,
    /// Relative display time ("2 min ago")
    pub timestamp: String,
    pub status: TxStatus,
    /// Fee paid in ETH
    pub fee: f64,
}

impl TransactionRecord {
    pub fn new(
        hash: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        value: f64,
        timestamp: impl Into<String>,
        status: TxStatus,
        fee: f64,
    ) -> Self {
        Self {
            hash: hash.into(),
            from: from.into(),
            to: to.into(),
            value,
            timestamp: timestamp.into(),
            status,
            fee,
        }
    }

    /// Case-insensitive match against hash and both addresses.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.hash.to_lowercase().contains(needle_lower)
            || self.from.to_lowercase().contains(needle_lower)
            || self.to.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("confirmed".parse::<TxStatus>().unwrap(), TxStatus::Confirmed);
        assert_eq!("Pending".parse::<TxStatus>().unwrap(), TxStatus::Pending);
        assert_eq!(" failed ".parse::<TxStatus>().unwrap(), TxStatus::Failed);
        assert_eq!("dropped".parse::<TxStatus>().unwrap(), TxStatus::Unrecognized);
    }

    #[test]
    fn test_status_deserialize_unknown() {
        let status: TxStatus = serde_json::from_str("\"replaced\"").unwrap();
        assert_eq!(status, TxStatus::Unrecognized);
        let status: TxStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, TxStatus::Pending);
    }

    #[test]
    fn test_matches_hash_and_addresses() {
        let tx = TransactionRecord::new(
            "0xABC123...",
            "0x123abc...",
            "0x456def...",
            1.5,
            "2 min ago",
            TxStatus::Confirmed,
            0.002,
        );
        assert!(tx.matches("abc123"));
        assert!(tx.matches("456d"));
        assert!(!tx.matches("999"));
    }
}
