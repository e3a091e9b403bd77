//! blockdash - a terminal dashboard for blockchain network statistics
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
