//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`SnapshotSource`] - produces statistics snapshots for the dashboard

pub mod snapshot;

pub use snapshot::SnapshotSource;
