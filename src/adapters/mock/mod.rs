//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`ScriptedSource`] - snapshot source returning a scripted sequence

pub mod snapshot;

pub use snapshot::{sample_snapshot, ScriptedSource};
