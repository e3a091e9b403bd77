//! Errors raised by the dashboard outside the fetch path.

use thiserror::Error;

use super::category::ErrorCategory;

/// Errors from state mutation, seed validation, configuration and the
/// terminal environment.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A selection value outside its enumerated set.
    #[error("invalid {kind} selection: {value:?}")]
    InvalidSelection { kind: &'static str, value: String },

    /// Two transactions in one list share a hash.
    #[error("duplicate transaction hash {hash}")]
    DuplicateTransactionHash { hash: String },

    /// Blocks are not strictly decreasing by number.
    #[error("block #{number} at position {index} breaks newest-first ordering")]
    BlockOrder { index: usize, number: u64 },

    /// Two tokens in one wallet share a symbol.
    #[error("duplicate token symbol {symbol}")]
    DuplicateTokenSymbol { symbol: String },

    /// An environment or CLI setting could not be used.
    #[error("invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    /// The system clipboard rejected the copy.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::InvalidSelection { .. } => ErrorCategory::User,
            DashboardError::DuplicateTransactionHash { .. }
            | DashboardError::BlockOrder { .. }
            | DashboardError::DuplicateTokenSymbol { .. } => ErrorCategory::Client,
            DashboardError::Config { .. } => ErrorCategory::Configuration,
            DashboardError::Clipboard(_) | DashboardError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::InvalidSelection { .. } => "INVALID_SELECTION",
            DashboardError::DuplicateTransactionHash { .. } => "DUPLICATE_TX_HASH",
            DashboardError::BlockOrder { .. } => "BLOCK_ORDER",
            DashboardError::DuplicateTokenSymbol { .. } => "DUPLICATE_TOKEN",
            DashboardError::Config { .. } => "CONFIG",
            DashboardError::Clipboard(_) => "CLIPBOARD",
            DashboardError::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DashboardError::InvalidSelection {
            kind: "network",
            value: "solana".to_string(),
        };
        assert_eq!(err.to_string(), "invalid network selection: \"solana\"");
        assert_eq!(err.category(), ErrorCategory::User);
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DashboardError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "IO");
    }

    #[test]
    fn test_seed_errors_are_client_errors() {
        let err = DashboardError::BlockOrder { index: 2, number: 7 };
        assert_eq!(err.category(), ErrorCategory::Client);
        assert!(err.to_string().contains("#7"));
    }
}
