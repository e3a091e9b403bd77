//! Domain records displayed by the dashboard.
//!
//! - [`StatisticsSnapshot`] - network telemetry, replaced on every refresh
//! - [`TransactionRecord`] / [`BlockRecord`] - recent activity tables
//! - [`WalletSnapshot`] - the authenticated wallet
//! - [`ViewSelection`] - network, tab and search selection

pub mod block;
pub mod seed;
pub mod selection;
pub mod stats;
pub mod transaction;
pub mod wallet;

pub use block::BlockRecord;
pub use seed::{ActivityPoint, HomeContent, SeedData};
pub use selection::{Network, Tab, ViewSelection};
pub use stats::StatisticsSnapshot;
pub use transaction::{TransactionRecord, TxStatus};
pub use wallet::{TokenHolding, WalletSnapshot};
