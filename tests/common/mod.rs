//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{mounted_scheduler, next_event};
//!
//! let (mut scheduler, mut store, mut rx) = mounted_scheduler(source);
//! let event = next_event(&mut rx).await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use blockdash::adapters::mock::ScriptedSource;
use blockdash::app::{App, AppMessage};
use blockdash::config::DashboardConfig;
use blockdash::models::SeedData;
use blockdash::scheduler::{EventOutcome, RefreshEvent, RefreshScheduler};
use blockdash::state::DashboardStore;
use tokio::sync::mpsc;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const MANUAL_DELAY: Duration = Duration::from_secs(1);

pub fn demo_store() -> DashboardStore {
    DashboardStore::new(SeedData::demo().unwrap()).unwrap()
}

/// Started scheduler with the default intervals, plus a fresh store.
pub fn mounted_scheduler(
    source: ScriptedSource,
) -> (
    RefreshScheduler,
    DashboardStore,
    mpsc::UnboundedReceiver<AppMessage>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut scheduler =
        RefreshScheduler::new(Arc::new(source), tx, REFRESH_INTERVAL, MANUAL_DELAY).unwrap();
    scheduler.start();
    (scheduler, demo_store(), rx)
}

/// Wait for the next refresh event. Under paused time the clock auto-advances.
pub async fn next_event(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> RefreshEvent {
    let AppMessage::Refresh(event) = rx.recv().await.expect("message channel closed");
    event
}

/// Feed events to the scheduler until `count` snapshots have been applied.
pub async fn run_until_applied(
    scheduler: &mut RefreshScheduler,
    store: &mut DashboardStore,
    rx: &mut mpsc::UnboundedReceiver<AppMessage>,
    count: usize,
) -> Vec<EventOutcome> {
    let mut outcomes = Vec::new();
    let mut applied = 0;
    while applied < count {
        let outcome = scheduler.handle(next_event(rx).await, store);
        if outcome == EventOutcome::SnapshotApplied {
            applied += 1;
        }
        outcomes.push(outcome);
    }
    outcomes
}

/// App wired to a scripted source with the dashboard mounted.
///
/// The message receiver is handed back so tests can pump it by hand.
pub fn mounted_app(source: ScriptedSource) -> (App, mpsc::UnboundedReceiver<AppMessage>) {
    let mut app = App::new(
        DashboardConfig::default(),
        Arc::new(source),
        SeedData::demo().unwrap(),
    );
    let rx = app.message_rx.take().expect("receiver already taken");
    app.navigate_to_dashboard();
    (app, rx)
}

/// Deliver one message from `rx` to the app.
pub async fn pump_one(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    let msg = rx.recv().await.expect("message channel closed");
    app.handle_message(msg);
}
