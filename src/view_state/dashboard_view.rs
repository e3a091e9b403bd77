//! Dashboard-specific view state
//!
//! This module provides view-only types for the dashboard that can be
//! rendered without accessing the store.

use chrono::{DateTime, Utc};

use crate::error::FetchError;
use crate::models::{
    ActivityPoint, BlockRecord, StatisticsSnapshot, Tab, TransactionRecord, ViewSelection,
    WalletSnapshot,
};

// ============================================================================
// FooterStatus
// ============================================================================

/// What the footer status slot shows, highest priority first
#[derive(Debug, Clone, PartialEq)]
pub enum FooterStatus<'a> {
    /// Transient notice such as clipboard feedback
    Notice(&'a str),
    /// Last fetch failed; the stats on screen are stale
    Stale(&'a FetchError),
    /// Last successful refresh
    Updated(DateTime<Utc>),
    /// Nothing fetched yet
    Waiting,
}

// ============================================================================
// DashboardViewState
// ============================================================================

/// Borrowed snapshot of the dashboard for one render pass.
///
/// Built by `DashboardStore::view`; never outlives the frame it was built for.
#[derive(Debug, Clone)]
pub struct DashboardViewState<'a> {
    pub stats: &'a StatisticsSnapshot,
    pub transactions: &'a [TransactionRecord],
    pub blocks: &'a [BlockRecord],
    pub wallet: &'a WalletSnapshot,
    pub activity: &'a [ActivityPoint],
    pub selection: &'a ViewSelection,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_error: Option<&'a FetchError>,
    pub notice: Option<&'a str>,
    /// Lowercased search text, computed once per frame
    needle: String,
}

impl<'a> DashboardViewState<'a> {
    pub fn new(
        stats: &'a StatisticsSnapshot,
        transactions: &'a [TransactionRecord],
        blocks: &'a [BlockRecord],
        wallet: &'a WalletSnapshot,
        activity: &'a [ActivityPoint],
        selection: &'a ViewSelection,
    ) -> Self {
        Self {
            stats,
            transactions,
            blocks,
            wallet,
            activity,
            selection,
            last_updated: None,
            last_error: None,
            notice: None,
            needle: selection.search_text.trim().to_lowercase(),
        }
    }

    /// Builder-style setter for the footer status inputs
    pub fn with_status(
        mut self,
        last_updated: Option<DateTime<Utc>>,
        last_error: Option<&'a FetchError>,
        notice: Option<&'a str>,
    ) -> Self {
        self.last_updated = last_updated;
        self.last_error = last_error;
        self.notice = notice;
        self
    }

    pub fn active_tab(&self) -> Tab {
        self.selection.tab
    }

    pub fn is_searching(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Transactions matching the search text, in list order
    pub fn filtered_transactions(&self) -> Vec<&'a TransactionRecord> {
        let transactions = self.transactions;
        transactions
            .iter()
            .filter(|tx| self.needle.is_empty() || tx.matches(&self.needle))
            .collect()
    }

    /// Blocks matching the search text, newest first
    pub fn filtered_blocks(&self) -> Vec<&'a BlockRecord> {
        let blocks = self.blocks;
        blocks
            .iter()
            .filter(|block| self.needle.is_empty() || block.matches(&self.needle))
            .collect()
    }

    /// Row count of the active tab after filtering
    pub fn visible_rows(&self) -> usize {
        match self.selection.tab {
            Tab::Transactions => self.filtered_transactions().len(),
            Tab::Blocks => self.filtered_blocks().len(),
        }
    }

    /// The refresh control is disabled while a manual refresh runs
    pub fn can_refresh(&self) -> bool {
        !self.selection.is_refreshing
    }

    pub fn refresh_label(&self) -> &'static str {
        if self.selection.is_refreshing {
            "Refreshing..."
        } else {
            "Refresh"
        }
    }

    pub fn has_wallet_discrepancy(&self) -> bool {
        self.wallet.value_discrepancy().is_some()
    }

    pub fn has_stats(&self) -> bool {
        self.last_updated.is_some() || !self.stats.is_empty()
    }

    pub fn max_activity(&self) -> u64 {
        self.activity.iter().map(|p| p.tps).max().unwrap_or(0)
    }

    pub fn footer_status(&self) -> FooterStatus<'a> {
        if let Some(notice) = self.notice {
            return FooterStatus::Notice(notice);
        }
        if let Some(error) = self.last_error {
            return FooterStatus::Stale(error);
        }
        match self.last_updated {
            Some(at) => FooterStatus::Updated(at),
            None => FooterStatus::Waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::{demo_activity, demo_blocks, demo_transactions, demo_wallet};

    struct Fixture {
        stats: StatisticsSnapshot,
        transactions: Vec<TransactionRecord>,
        blocks: Vec<BlockRecord>,
        wallet: WalletSnapshot,
        activity: Vec<ActivityPoint>,
        selection: ViewSelection,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                stats: StatisticsSnapshot::default(),
                transactions: demo_transactions(),
                blocks: demo_blocks(),
                wallet: demo_wallet().unwrap(),
                activity: demo_activity(),
                selection: ViewSelection::default(),
            }
        }

        fn view(&self) -> DashboardViewState<'_> {
            DashboardViewState::new(
                &self.stats,
                &self.transactions,
                &self.blocks,
                &self.wallet,
                &self.activity,
                &self.selection,
            )
        }
    }

    #[test]
    fn test_no_search_shows_everything() {
        let fixture = Fixture::new();
        let view = fixture.view();
        assert!(!view.is_searching());
        assert_eq!(view.filtered_transactions().len(), 5);
        assert_eq!(view.filtered_blocks().len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut fixture = Fixture::new();
        fixture.selection.search_text = "0XABC".to_string();
        let view = fixture.view();
        let txs = view.filtered_transactions();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].hash, "0xabc123...");
    }

    #[test]
    fn test_search_matches_block_number() {
        let mut fixture = Fixture::new();
        fixture.selection.search_text = "#1567888".to_string();
        fixture.selection.tab = Tab::Blocks;
        let view = fixture.view();
        let blocks = view.filtered_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].number, 1_567_888);
        assert_eq!(view.visible_rows(), 1);
    }

    #[test]
    fn test_refresh_label() {
        let mut fixture = Fixture::new();
        assert_eq!(fixture.view().refresh_label(), "Refresh");
        assert!(fixture.view().can_refresh());
        fixture.selection.is_refreshing = true;
        assert_eq!(fixture.view().refresh_label(), "Refreshing...");
        assert!(!fixture.view().can_refresh());
    }

    #[test]
    fn test_footer_status_priority() {
        let fixture = Fixture::new();
        let error = FetchError::Timeout { timeout_ms: 100 };
        let now = Utc::now();

        assert_eq!(fixture.view().footer_status(), FooterStatus::Waiting);
        assert_eq!(
            fixture.view().with_status(Some(now), None, None).footer_status(),
            FooterStatus::Updated(now)
        );
        assert_eq!(
            fixture
                .view()
                .with_status(Some(now), Some(&error), None)
                .footer_status(),
            FooterStatus::Stale(&error)
        );
        assert_eq!(
            fixture
                .view()
                .with_status(Some(now), Some(&error), Some("Copied"))
                .footer_status(),
            FooterStatus::Notice("Copied")
        );
    }

    #[test]
    fn test_demo_wallet_flags_discrepancy() {
        let fixture = Fixture::new();
        assert!(fixture.view().has_wallet_discrepancy());
        assert_eq!(fixture.view().max_activity(), 32);
    }
}
