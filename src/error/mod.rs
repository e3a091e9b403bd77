//! Error handling for blockdash.
//!
//! - [`FetchError`]: a snapshot fetch failed; recoverable, the last good
//!   snapshot stays on screen
//! - [`DashboardError`]: invalid selections, invalid seed data, config,
//!   clipboard and I/O failures
//! - [`ErrorCategory`]: classification shared by both, used for retry
//!   decisions and footer hints
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Source unreachable, timeout | Yes |
//! | Server | Source returned 5xx | Yes |
//! | Client | Payload or seed breaks an invariant | No |
//! | User | Unknown network or tab | No |
//! | System | Clipboard, log file, terminal | No |
//! | Configuration | Bad environment value | No |

mod category;
mod dashboard;
mod fetch;

pub use category::ErrorCategory;
pub use dashboard::DashboardError;
pub use fetch::FetchError;

/// Result alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_transient_fetch_errors_are_retryable() {
        let retryable = [
            FetchError::Transport {
                message: "connection refused".to_string(),
            },
            FetchError::Timeout { timeout_ms: 5_000 },
            FetchError::HttpStatus { status: 503 },
        ];
        for err in retryable {
            assert!(err.is_retryable(), "Expected {:?} to be retryable", err);
        }

        let permanent = [
            FetchError::HttpStatus { status: 400 },
            FetchError::InvalidPayload {
                message: "not json".to_string(),
            },
            FetchError::InvalidSnapshot {
                message: "negative".to_string(),
            },
        ];
        for err in permanent {
            assert!(!err.is_retryable(), "Expected {:?} to not be retryable", err);
        }
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            FetchError::Transport { message: String::new() }.error_code(),
            FetchError::Timeout { timeout_ms: 0 }.error_code(),
            FetchError::HttpStatus { status: 500 }.error_code(),
            FetchError::InvalidPayload { message: String::new() }.error_code(),
            FetchError::InvalidSnapshot { message: String::new() }.error_code(),
            DashboardError::Clipboard(String::new()).error_code(),
        ];
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }
}
