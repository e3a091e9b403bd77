//! Application state management
//!
//! - [`DashboardStore`]: single source of truth for the dashboard screen

pub mod dashboard_store;

pub use dashboard_store::DashboardStore;
