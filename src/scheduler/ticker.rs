//! Repeating refresh timer.
//!
//! The ticker never fetches anything itself; it only reports that a period
//! elapsed and leaves the decision to the scheduler on the main loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::types::RefreshEvent;
use crate::app::AppMessage;

/// Spawn the repeating timer for one scheduler generation.
///
/// The first tick fires immediately, then once every `period`. The task ends
/// when the message channel closes or the handle is aborted.
pub fn spawn_refresh_ticker(
    message_tx: mpsc::UnboundedSender<AppMessage>,
    period: Duration,
    generation: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(
            generation,
            "Refresh ticker started (interval: {}ms)",
            period.as_millis()
        );

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            tracing::trace!(generation, "Refresh tick");

            if message_tx
                .send(AppMessage::Refresh(RefreshEvent::Tick { generation }))
                .is_err()
            {
                tracing::debug!("Message channel closed, stopping refresh ticker");
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_refresh_ticker(tx, Duration::from_secs(30), 4);

        let start = tokio::time::Instant::now();
        match rx.recv().await {
            Some(AppMessage::Refresh(RefreshEvent::Tick { generation })) => {
                assert_eq!(generation, 4)
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert!(start.elapsed() < Duration::from_secs(1));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_refresh_ticker(tx, Duration::from_secs(30), 1);

        rx.recv().await;
        let start = tokio::time::Instant::now();
        rx.recv().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(30));
        assert!(elapsed < Duration::from_secs(31));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_channel_closes() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let handle = spawn_refresh_ticker(tx, Duration::from_millis(5), 1);
        assert!(handle.await.is_ok());
    }
}
