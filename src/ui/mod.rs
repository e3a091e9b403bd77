//! UI rendering for blockdash
//!
//! - Home: static market overview
//! - Dashboard: stats, activity chart, transaction/block tables, wallet
//!
//! Rendering only reads state. The dashboard is drawn from the
//! [`DashboardViewState`](crate::view_state::DashboardViewState) borrowed
//! from the store for the current frame.

pub mod dashboard;
pub mod format;
pub mod home;
pub mod theme;

// Re-export theme colors for external use
pub use theme::{
    network_color, status_color, token_color, COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM,
    COLOR_HEADER, COLOR_NEUTRAL,
};

use ratatui::Frame;

use crate::app::{App, Screen};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match (app.screen, app.dashboard.as_ref()) {
        (Screen::Dashboard, Some(view)) => {
            let state = view.store.view();
            dashboard::render(frame, area, &state, app.search_active);
        }
        _ => home::render(frame, area, &app.home),
    }
}
