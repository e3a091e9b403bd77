//! Shared types for the refresh scheduler.

use crate::error::FetchError;
use crate::models::StatisticsSnapshot;

/// Lifecycle state of a [`RefreshScheduler`](super::RefreshScheduler)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerState {
    /// Not mounted, no timers running
    #[default]
    Idle,
    /// Repeating timer running, any in-flight fetch is silent
    AutoScheduled,
    /// User-requested refresh pending or in flight
    ManualRefreshInFlight,
}

impl SchedulerState {
    pub fn is_running(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What triggered a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    /// Repeating timer
    Auto,
    /// User intent
    Manual,
}

impl RefreshKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

/// Events produced by scheduler tasks and delivered back to the main loop.
///
/// Every event carries the generation it was created under; events from an
/// older generation are dropped when handled.
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// The repeating timer fired
    Tick { generation: u64 },
    /// A fetch resolved
    Fetched {
        generation: u64,
        request_id: u64,
        kind: RefreshKind,
        result: Result<StatisticsSnapshot, FetchError>,
    },
}

impl RefreshEvent {
    pub fn generation(&self) -> u64 {
        match self {
            Self::Tick { generation } | Self::Fetched { generation, .. } => *generation,
        }
    }
}

/// What [`RefreshScheduler::handle`](super::RefreshScheduler::handle) did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A tick started a new fetch
    FetchIssued,
    /// A tick arrived while another fetch was in flight
    TickSkipped,
    /// A snapshot was written to the store
    SnapshotApplied,
    /// A fetch failed; the store kept its previous snapshot
    FetchFailed,
    /// The event belonged to a stopped generation or an unknown request
    Stale,
}

impl EventOutcome {
    /// Whether the store may have changed
    pub fn touched_store(&self) -> bool {
        matches!(self, Self::SnapshotApplied | Self::FetchFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(SchedulerState::default(), SchedulerState::Idle);
        assert!(!SchedulerState::Idle.is_running());
        assert!(SchedulerState::AutoScheduled.is_running());
        assert!(SchedulerState::ManualRefreshInFlight.is_running());
    }

    #[test]
    fn test_event_generation() {
        assert_eq!(RefreshEvent::Tick { generation: 3 }.generation(), 3);
        let fetched = RefreshEvent::Fetched {
            generation: 7,
            request_id: 1,
            kind: RefreshKind::Manual,
            result: Err(FetchError::Timeout { timeout_ms: 10 }),
        };
        assert_eq!(fetched.generation(), 7);
    }

    #[test]
    fn test_outcome_touched_store() {
        assert!(EventOutcome::SnapshotApplied.touched_store());
        assert!(EventOutcome::FetchFailed.touched_store());
        assert!(!EventOutcome::Stale.touched_store());
        assert!(!EventOutcome::FetchIssued.touched_store());
    }
}
