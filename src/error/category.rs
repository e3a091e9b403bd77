//! Error category classification.
//!
//! Categories drive how the dashboard reacts to a failure: whether the next
//! scheduled refresh is expected to fix it, and what hint to show the user.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// Every [`FetchError`](super::FetchError) and
/// [`DashboardError`](super::DashboardError) maps to exactly one category.
/// The footer pairs the error message with [`recovery_hint`](Self::recovery_hint),
/// and the scheduler relies on retryable categories being fixed by a later
/// tick rather than by anything the user does.
///
/// # Example
///
/// ```
/// use blockdash::error::{ErrorCategory, FetchError};
///
/// let err = FetchError::HttpStatus { status: 503 };
/// assert_eq!(err.category(), ErrorCategory::Server);
/// assert!(err.category().is_retryable());
/// assert_eq!(err.category().to_string(), "server");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Telemetry source unreachable or timed out.
    /// Transient; the next refresh retries.
    Network,

    /// Telemetry source answered with a 5xx status.
    /// Transient; the next refresh retries.
    Server,

    /// Payload or state that breaks a data invariant.
    /// Not retryable - the source or seed data is wrong.
    Client,

    /// Invalid user input (unknown network or tab).
    User,

    /// OS-level failures (log file, clipboard, terminal).
    System,

    /// Invalid settings in the environment or on the command line.
    Configuration,
}

impl ErrorCategory {
    /// Whether a later attempt at the same operation can succeed unchanged.
    ///
    /// Only [`Network`](Self::Network) and [`Server`](Self::Server) are
    /// retryable. Client, user, system and configuration errors need the
    /// input or environment to change first.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested next step, shown next to the error in the footer.
    ///
    /// ```
    /// use blockdash::error::ErrorCategory;
    ///
    /// assert_eq!(
    ///     ErrorCategory::Network.recovery_hint(),
    ///     "showing last known data, retrying on next refresh"
    /// );
    /// ```
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "showing last known data, retrying on next refresh",
            ErrorCategory::Server => "source is failing, retrying on next refresh",
            ErrorCategory::Client => "source returned unusable data",
            ErrorCategory::User => "check the value and try again",
            ErrorCategory::System => "check permissions and the terminal environment",
            ErrorCategory::Configuration => "check BLOCKDASH_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::System.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Network), "network");
        assert_eq!(format!("{}", ErrorCategory::Configuration), "configuration");
    }

    #[test]
    fn test_recovery_hint_mentions_retry_for_transient() {
        assert!(ErrorCategory::Network.recovery_hint().contains("retrying"));
        assert!(ErrorCategory::Server.recovery_hint().contains("retrying"));
        assert!(!ErrorCategory::Client.recovery_hint().contains("retrying"));
    }
}
