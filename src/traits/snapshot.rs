//! Snapshot source trait abstraction.
//!
//! The dashboard never fetches telemetry itself; it asks a
//! [`SnapshotSource`] for a fresh [`StatisticsSnapshot`]. Production code
//! uses the simulated or HTTP adapters, tests use a scripted mock.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::StatisticsSnapshot;

/// Produces a new statistics snapshot on demand.
///
/// Implementations must return snapshots that pass
/// [`StatisticsSnapshot::validate`]. The caller alone decides what to do with
/// the result; a source has no side effects on dashboard state.
///
/// # Example
///
/// ```ignore
/// use blockdash::traits::SnapshotSource;
///
/// async fn gas_price<S: SnapshotSource + ?Sized>(source: &S) -> Option<u64> {
///     source.fetch_snapshot().await.ok().map(|s| s.gas_price)
/// }
/// ```
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch a fresh snapshot.
    async fn fetch_snapshot(&self) -> Result<StatisticsSnapshot, FetchError>;

    /// Human-readable name for logs and the footer.
    fn name(&self) -> &str;
}
