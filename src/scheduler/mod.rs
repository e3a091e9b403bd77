//! Periodic and user-triggered snapshot refresh.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │  Refresh Ticker │     │  Manual Refresh │
//! │  (interval)     │     │  (delayed fetch)│
//! └────────┬────────┘     └────────┬────────┘
//!          │ Tick                  │ Fetched
//!          └───────────┬───────────┘
//!                      ▼
//!              ┌───────────────┐
//!              │  AppMessage   │
//!              │  channel      │
//!              └───────┬───────┘
//!                      ▼
//!              ┌───────────────┐
//!              │  Scheduler    │
//!              │  (main loop)  │
//!              └───────┬───────┘
//!                      ▼
//!              ┌───────────────┐
//!              │ DashboardStore│
//!              └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut scheduler = RefreshScheduler::from_config(&config, source, app.message_tx.clone())?;
//! scheduler.start();
//!
//! // In the main loop:
//! if let AppMessage::Refresh(event) = msg {
//!     scheduler.handle(event, &mut store);
//! }
//! ```

mod refresh;
mod ticker;
mod types;

pub use refresh::RefreshScheduler;
pub use ticker::spawn_refresh_ticker;
pub use types::{EventOutcome, RefreshEvent, RefreshKind, SchedulerState};
