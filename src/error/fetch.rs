//! Errors produced while fetching a statistics snapshot.

use thiserror::Error;

use super::category::ErrorCategory;

/// Failure of a single snapshot fetch.
///
/// A fetch failure never clears the dashboard: the store keeps the last
/// good snapshot and records the error for display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Could not reach the telemetry source.
    #[error("telemetry source unreachable: {message}")]
    Transport { message: String },

    /// The request exceeded its deadline.
    #[error("telemetry request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Source responded with a non-success status.
    #[error("telemetry source returned HTTP {status}")]
    HttpStatus { status: u16 },

    /// Body was not a statistics snapshot.
    #[error("malformed snapshot payload: {message}")]
    InvalidPayload { message: String },

    /// Payload parsed but violates a numeric invariant.
    #[error("snapshot rejected: {message}")]
    InvalidSnapshot { message: String },
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Transport { .. } | FetchError::Timeout { .. } => ErrorCategory::Network,
            FetchError::HttpStatus { status } if *status >= 500 => ErrorCategory::Server,
            FetchError::HttpStatus { .. } => ErrorCategory::Client,
            FetchError::InvalidPayload { .. } | FetchError::InvalidSnapshot { .. } => {
                ErrorCategory::Client
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Short error code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "FETCH_TRANSPORT",
            FetchError::Timeout { .. } => "FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "FETCH_HTTP_STATUS",
            FetchError::InvalidPayload { .. } => "FETCH_INVALID_PAYLOAD",
            FetchError::InvalidSnapshot { .. } => "FETCH_INVALID_SNAPSHOT",
        }
    }

    /// One-line message for the dashboard footer.
    pub fn user_message(&self) -> String {
        format!("{} ({})", self, self.category().recovery_hint())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::InvalidPayload {
            message: err.to_string(),
        }
    }
}
