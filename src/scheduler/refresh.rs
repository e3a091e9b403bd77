//! The refresh scheduler.
//!
//! Owns the repeating timer and the single in-flight fetch for one mounted
//! dashboard. Spawned tasks only ever send [`RefreshEvent`]s; the scheduler
//! applies results to the store from the main loop, so it is the only writer
//! of the statistics snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::ticker::spawn_refresh_ticker;
use super::types::{EventOutcome, RefreshEvent, RefreshKind, SchedulerState};
use crate::app::AppMessage;
use crate::config::{require_non_zero, DashboardConfig, ENV_REFRESH_INTERVAL_MS};
use crate::error::DashboardResult;
use crate::state::DashboardStore;
use crate::traits::SnapshotSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    request_id: u64,
    kind: RefreshKind,
}

/// Coordinates timer-driven and user-driven snapshot fetches.
///
/// At most one fetch is in flight at any time. Every spawned task is tagged
/// with the generation current at spawn time; [`stop`](Self::stop) bumps the
/// generation, so anything still queued from before teardown is dropped.
pub struct RefreshScheduler {
    source: Arc<dyn SnapshotSource>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    refresh_interval: Duration,
    manual_delay: Duration,
    state: SchedulerState,
    generation: u64,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    ticker: Option<JoinHandle<()>>,
    fetch_task: Option<JoinHandle<()>>,
    fetches_issued: u64,
}

impl RefreshScheduler {
    /// Create an idle scheduler.
    ///
    /// Nothing is spawned until [`start`](Self::start) is called.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`](crate::error::DashboardError::Config)
    /// when `refresh_interval` is zero. A zero `manual_delay` is allowed.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        refresh_interval: Duration,
        manual_delay: Duration,
    ) -> DashboardResult<Self> {
        require_non_zero(ENV_REFRESH_INTERVAL_MS, refresh_interval)?;
        Ok(Self {
            source,
            message_tx,
            refresh_interval,
            manual_delay,
            state: SchedulerState::Idle,
            generation: 0,
            next_request_id: 0,
            in_flight: None,
            ticker: None,
            fetch_task: None,
            fetches_issued: 0,
        })
    }

    /// Scheduler using the intervals from `config`.
    pub fn from_config(
        config: &DashboardConfig,
        source: Arc<dyn SnapshotSource>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> DashboardResult<Self> {
        Self::new(
            source,
            message_tx,
            config.refresh_interval,
            config.manual_refresh_delay,
        )
    }

    /// Start the repeating timer. The first tick fires immediately.
    ///
    /// Must be called from within a tokio runtime. No-op unless idle.
    pub fn start(&mut self) {
        if self.state != SchedulerState::Idle {
            tracing::debug!(state = ?self.state, "Refresh scheduler already running");
            return;
        }

        tracing::info!(
            source = self.source.name(),
            generation = self.generation,
            "Starting refresh scheduler"
        );
        self.ticker = Some(spawn_refresh_ticker(
            self.message_tx.clone(),
            self.refresh_interval,
            self.generation,
        ));
        self.state = SchedulerState::AutoScheduled;
    }

    /// Cancel all timers and pending fetches and return to idle.
    ///
    /// Events already queued from this generation become no-ops.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Idle && self.ticker.is_none() && self.fetch_task.is_none()
        {
            return;
        }

        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        if let Some(handle) = self.fetch_task.take() {
            handle.abort();
        }
        self.in_flight = None;
        self.generation += 1;
        self.state = SchedulerState::Idle;

        tracing::info!(generation = self.generation, "Refresh scheduler stopped");
    }

    /// Ask for a user-visible refresh.
    ///
    /// Accepted only while auto-scheduled with nothing in flight. Marks the
    /// store as refreshing and fetches after the minimum visible delay.
    /// Returns `false` when the request was ignored.
    pub fn request_manual_refresh(&mut self, store: &mut DashboardStore) -> bool {
        if self.state != SchedulerState::AutoScheduled {
            tracing::debug!(state = ?self.state, "Manual refresh ignored");
            return false;
        }
        if let Some(in_flight) = self.in_flight {
            tracing::debug!(
                request_id = in_flight.request_id,
                kind = in_flight.kind.as_str(),
                "Manual refresh ignored, fetch already in flight"
            );
            return false;
        }

        store.set_refreshing(true);
        self.state = SchedulerState::ManualRefreshInFlight;
        self.issue_fetch(RefreshKind::Manual, self.manual_delay);
        true
    }

    /// Apply an event produced by this scheduler's tasks.
    pub fn handle(&mut self, event: RefreshEvent, store: &mut DashboardStore) -> EventOutcome {
        if event.generation() != self.generation || self.state == SchedulerState::Idle {
            tracing::debug!(
                event_generation = event.generation(),
                generation = self.generation,
                "Dropping refresh event from stopped scheduler"
            );
            return EventOutcome::Stale;
        }

        match event {
            RefreshEvent::Tick { .. } => {
                if let Some(in_flight) = self.in_flight {
                    tracing::debug!(
                        request_id = in_flight.request_id,
                        "Skipping tick, fetch already in flight"
                    );
                    return EventOutcome::TickSkipped;
                }
                self.issue_fetch(RefreshKind::Auto, Duration::ZERO);
                EventOutcome::FetchIssued
            }
            RefreshEvent::Fetched {
                request_id,
                kind,
                result,
                ..
            } => {
                match self.in_flight {
                    Some(in_flight) if in_flight.request_id == request_id => {}
                    _ => {
                        tracing::debug!(request_id, "Dropping result for unknown request");
                        return EventOutcome::Stale;
                    }
                }
                self.in_flight = None;
                self.fetch_task = None;

                let outcome = match result {
                    Ok(snapshot) => {
                        tracing::debug!(
                            request_id,
                            kind = kind.as_str(),
                            gas_price = snapshot.gas_price,
                            "Applying snapshot"
                        );
                        store.apply_snapshot(snapshot);
                        EventOutcome::SnapshotApplied
                    }
                    Err(error) => {
                        store.record_fetch_failure(&error);
                        EventOutcome::FetchFailed
                    }
                };

                if kind == RefreshKind::Manual {
                    store.set_refreshing(false);
                    self.state = SchedulerState::AutoScheduled;
                }
                outcome
            }
        }
    }

    fn issue_fetch(&mut self, kind: RefreshKind, delay: Duration) {
        self.next_request_id += 1;
        self.fetches_issued += 1;
        let request_id = self.next_request_id;
        let generation = self.generation;
        self.in_flight = Some(InFlight { request_id, kind });

        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();

        tracing::debug!(request_id, kind = kind.as_str(), "Issuing snapshot fetch");
        self.fetch_task = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let result = source.fetch_snapshot().await;
            let event = RefreshEvent::Fetched {
                generation,
                request_id,
                kind,
                result,
            };
            if message_tx.send(AppMessage::Refresh(event)).is_err() {
                tracing::debug!(request_id, "Message channel closed, dropping fetch result");
            }
        }));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Total fetches issued over the scheduler's lifetime
    pub fn fetches_issued(&self) -> u64 {
        self.fetches_issued
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for RefreshScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshScheduler")
            .field("source", &self.source.name())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
