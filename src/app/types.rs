//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`DashboardView`] - Store and scheduler for a mounted dashboard

use crate::scheduler::RefreshScheduler;
use crate::state::DashboardStore;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Dashboard,
}

/// A mounted dashboard.
///
/// Created on navigation to the dashboard and dropped on navigation away;
/// dropping it stops the scheduler.
#[derive(Debug)]
pub struct DashboardView {
    pub store: DashboardStore,
    pub scheduler: RefreshScheduler,
}
