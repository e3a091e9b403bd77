//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function: data in -> pixels out. The store hands
//! out a borrowed [`DashboardViewState`] for each frame, so UI components
//! never see the store itself or mutate anything.
//!
//! ```text
//! ┌─────────────────┐
//! │ DashboardStore  │
//! │  (owns state)   │
//! └────────┬────────┘
//!          │ view()
//!          ▼
//! ┌─────────────────────┐
//! │ DashboardViewState  │
//! │   (borrows data)    │
//! └────────┬────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │       UI        │
//! │ (pure rendering)│
//! └─────────────────┘
//! ```

pub mod dashboard_view;

pub use dashboard_view::{DashboardViewState, FooterStatus};
