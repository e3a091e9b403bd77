//! View state store for the dashboard screen.
//!
//! [`DashboardStore`] is the single owner of everything the dashboard
//! displays. Each concern has exactly one mutation entry point; rendering
//! only ever sees a borrowed [`DashboardViewState`] built between mutations,
//! so a frame never observes a half-applied update.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{DashboardError, DashboardResult, FetchError};
use crate::models::block::first_out_of_order;
use crate::models::{
    ActivityPoint, BlockRecord, Network, SeedData, StatisticsSnapshot, Tab, TransactionRecord,
    ViewSelection, WalletSnapshot,
};
use crate::view_state::DashboardViewState;

/// State container for the dashboard view.
///
/// Every mutation that changes something bumps [`DashboardStore::revision`];
/// setters called with the current value are no-ops and leave the revision
/// alone, which is how the app decides whether to redraw.
#[derive(Debug)]
pub struct DashboardStore {
    stats: StatisticsSnapshot,
    transactions: Vec<TransactionRecord>,
    blocks: Vec<BlockRecord>,
    wallet: WalletSnapshot,
    activity: Vec<ActivityPoint>,
    selection: ViewSelection,
    /// When the current snapshot was applied
    last_updated: Option<DateTime<Utc>>,
    /// Most recent fetch failure, cleared by the next successful snapshot
    last_error: Option<FetchError>,
    /// Short-lived status message (clipboard feedback, rejected input)
    notice: Option<String>,
    snapshots_applied: u64,
    revision: u64,
}

impl DashboardStore {
    /// Build a store from seed collections.
    ///
    /// Rejects duplicate transaction hashes and blocks that are not strictly
    /// newest-first. Token symbol uniqueness is guaranteed by
    /// [`WalletSnapshot::new`]. The wallet USD total is not reconciled with its
    /// tokens; a mismatch is logged and left as is.
    pub fn new(seed: SeedData) -> DashboardResult<Self> {
        let mut hashes = HashSet::new();
        for tx in &seed.transactions {
            if !hashes.insert(tx.hash.as_str()) {
                return Err(DashboardError::DuplicateTransactionHash {
                    hash: tx.hash.clone(),
                });
            }
        }
        if let Some(index) = first_out_of_order(&seed.blocks) {
            return Err(DashboardError::BlockOrder {
                index,
                number: seed.blocks[index].number,
            });
        }
        warn_on_wallet_discrepancy(&seed.wallet);

        Ok(Self {
            stats: StatisticsSnapshot::default(),
            transactions: seed.transactions,
            blocks: seed.blocks,
            wallet: seed.wallet,
            activity: seed.activity,
            selection: ViewSelection::default(),
            last_updated: None,
            last_error: None,
            notice: None,
            snapshots_applied: 0,
            revision: 0,
        })
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the statistics snapshot wholesale.
    pub fn apply_snapshot(&mut self, snapshot: StatisticsSnapshot) {
        self.stats = snapshot;
        self.last_updated = Some(Utc::now());
        self.last_error = None;
        self.snapshots_applied += 1;
        self.bump();
    }

    /// Record a failed fetch. The current snapshot stays in place.
    pub fn record_fetch_failure(&mut self, error: &FetchError) {
        tracing::warn!(
            code = error.error_code(),
            retryable = error.is_retryable(),
            "Snapshot fetch failed, keeping last known data: {}",
            error
        );
        self.last_error = Some(error.clone());
        self.bump();
    }

    pub fn set_active_network(&mut self, network: Network) {
        if self.selection.network != network {
            tracing::info!(network = network.id(), "Active network changed");
            self.selection.network = network;
            self.bump();
        }
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.selection.tab != tab {
            self.selection.tab = tab;
            self.bump();
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.selection.search_text != text {
            self.selection.search_text = text;
            self.bump();
        }
    }

    pub fn set_refreshing(&mut self, refreshing: bool) {
        if self.selection.is_refreshing != refreshing {
            self.selection.is_refreshing = refreshing;
            self.bump();
        }
    }

    /// Select a network by its identifier, rejecting unknown values.
    pub fn select_network_str(&mut self, value: &str) -> DashboardResult<()> {
        let network = value.parse::<Network>()?;
        self.set_active_network(network);
        Ok(())
    }

    /// Select a tab by its identifier, rejecting unknown values.
    pub fn select_tab_str(&mut self, value: &str) -> DashboardResult<()> {
        let tab = value.parse::<Tab>()?;
        self.set_active_tab(tab);
        Ok(())
    }

    /// Swap in a new wallet snapshot as a unit.
    pub fn replace_wallet(&mut self, wallet: WalletSnapshot) {
        if self.wallet != wallet {
            warn_on_wallet_discrepancy(&wallet);
            self.wallet = wallet;
            self.bump();
        }
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.bump();
    }

    pub fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn stats(&self) -> &StatisticsSnapshot {
        &self.stats
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn blocks(&self) -> &[BlockRecord] {
        &self.blocks
    }

    pub fn wallet(&self) -> &WalletSnapshot {
        &self.wallet
    }

    pub fn activity(&self) -> &[ActivityPoint] {
        &self.activity
    }

    pub fn selection(&self) -> &ViewSelection {
        &self.selection
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Number of snapshots applied since creation
    pub fn snapshots_applied(&self) -> u64 {
        self.snapshots_applied
    }

    /// Monotonic change counter
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Borrow the state for one render pass.
    pub fn view(&self) -> DashboardViewState<'_> {
        DashboardViewState::new(
            &self.stats,
            &self.transactions,
            &self.blocks,
            &self.wallet,
            &self.activity,
            &self.selection,
        )
        .with_status(self.last_updated, self.last_error.as_ref(), self.notice.as_deref())
    }
}

fn warn_on_wallet_discrepancy(wallet: &WalletSnapshot) {
    if let Some(diff) = wallet.value_discrepancy() {
        tracing::warn!(
            address = wallet.address(),
            value_usd = wallet.value_usd(),
            token_total = wallet.token_total(),
            "Wallet USD value differs from token total by {:.2}",
            diff
        );
    }
}
