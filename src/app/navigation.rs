//! Navigation methods for the App.
//!
//! Entering the dashboard mounts a fresh store and scheduler; leaving it
//! stops the scheduler and drops the store.

use super::{App, DashboardView, Screen};
use crate::scheduler::RefreshScheduler;
use crate::state::DashboardStore;

impl App {
    /// Request application exit
    pub fn quit(&mut self) {
        self.navigate_to_home();
        self.should_quit = true;
    }

    /// Tear down the dashboard (if mounted) and show the home view.
    pub fn navigate_to_home(&mut self) {
        if let Some(mut view) = self.dashboard.take() {
            view.scheduler.stop();
            tracing::info!(
                snapshots = view.store.snapshots_applied(),
                "Dashboard unmounted"
            );
        }
        self.search_active = false;
        self.screen = Screen::Home;
        self.mark_dirty();
    }

    /// Mount the dashboard and start refreshing.
    ///
    /// Must be called from within a tokio runtime. A no-op when the
    /// dashboard is already mounted. When the seed data or the refresh
    /// settings are unusable the error is logged and the home view stays.
    pub fn navigate_to_dashboard(&mut self) {
        if self.dashboard.is_some() {
            self.screen = Screen::Dashboard;
            return;
        }

        let store = match DashboardStore::new(self.seed.clone()) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(code = e.error_code(), "Cannot mount dashboard: {}", e);
                return;
            }
        };

        let mut scheduler = match RefreshScheduler::from_config(
            &self.config,
            self.source.clone(),
            self.message_tx.clone(),
        ) {
            Ok(scheduler) => scheduler,
            Err(e) => {
                tracing::error!(code = e.error_code(), "Cannot mount dashboard: {}", e);
                return;
            }
        };
        scheduler.start();

        tracing::info!(source = self.source.name(), "Dashboard mounted");
        self.dashboard = Some(DashboardView { store, scheduler });
        self.screen = Screen::Dashboard;
        self.mark_dirty();
    }
}
