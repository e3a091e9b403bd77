//! Initial data handed to the dashboard store and the home view.
//!
//! Nothing here is global state: callers build a [`SeedData`] and pass it
//! into `DashboardStore::new`.

use super::{BlockRecord, TokenHolding, TransactionRecord, TxStatus, WalletSnapshot};
use crate::error::DashboardError;

/// Address of the demo wallet
pub const DEMO_WALLET_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9eE0a43C3d97";

/// Static collections the dashboard starts with.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub transactions: Vec<TransactionRecord>,
    pub blocks: Vec<BlockRecord>,
    pub wallet: WalletSnapshot,
    pub activity: Vec<ActivityPoint>,
}

impl SeedData {
    /// The demo dataset.
    pub fn demo() -> Result<Self, DashboardError> {
        Ok(Self {
            transactions: demo_transactions(),
            blocks: demo_blocks(),
            wallet: demo_wallet()?,
            activity: demo_activity(),
        })
    }
}

/// One bar of the network activity chart
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    pub label: String,
    pub tps: u64,
}

pub fn demo_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("0xabc123...", "0x123abc...", "0x456def...", 1.5, "2 min ago", TxStatus::Confirmed, 0.002),
        TransactionRecord::new("0xdef456...", "0x789ghi...", "0x012jkl...", 0.8, "5 min ago", TxStatus::Pending, 0.003),
        TransactionRecord::new("0xghi789...", "0x345mno...", "0x678pqr...", 2.3, "10 min ago", TxStatus::Confirmed, 0.0015),
        TransactionRecord::new("0xjkl012...", "0x901stu...", "0x234vwx...", 1500.0, "15 min ago", TxStatus::Confirmed, 0.005),
        TransactionRecord::new("0xmno345...", "0x567yz0...", "0x890123...", 25.0, "20 min ago", TxStatus::Failed, 0.001),
    ]
}

pub fn demo_blocks() -> Vec<BlockRecord> {
    vec![
        BlockRecord::new(1_567_890, "2 min ago", 145, "0xminer1...", 128, 2.1),
        BlockRecord::new(1_567_889, "4 min ago", 89, "0xminer2...", 96, 2.0),
        BlockRecord::new(1_567_888, "6 min ago", 167, "0xminer3...", 142, 2.2),
        BlockRecord::new(1_567_887, "8 min ago", 112, "0xminer4...", 118, 2.0),
        BlockRecord::new(1_567_886, "10 min ago", 98, "0xminer5...", 105, 1.9),
    ]
}

pub fn demo_wallet() -> Result<WalletSnapshot, DashboardError> {
    WalletSnapshot::new(
        DEMO_WALLET_ADDRESS,
        2.5,
        8250.50,
        vec![
            TokenHolding::new("ETH", 2.5, 8250.50),
            TokenHolding::new("USDC", 1500.0, 1500.0),
            TokenHolding::new("UNI", 50.0, 325.0),
        ],
    )
}

pub fn demo_activity() -> Vec<ActivityPoint> {
    const LABELS: [&str; 7] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "23:59"];
    const TPS: [u64; 7] = [12, 18, 25, 32, 28, 21, 15];
    LABELS
        .iter()
        .zip(TPS)
        .map(|(label, tps)| ActivityPoint {
            label: (*label).to_string(),
            tps,
        })
        .collect()
}

// ============================================================================
// Home view content
// ============================================================================

/// Headline figure on the home view
#[derive(Debug, Clone, PartialEq)]
pub struct MarketStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Token row in the home market table
#[derive(Debug, Clone, PartialEq)]
pub struct MarketToken {
    pub name: &'static str,
    pub symbol: &'static str,
    pub price: &'static str,
    pub change: &'static str,
    pub volume: &'static str,
}

/// Activity row on the home view
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub hash: &'static str,
    pub kind: &'static str,
    pub amount: &'static str,
    pub time: &'static str,
    pub status: TxStatus,
}

/// Trending application row on the home view
#[derive(Debug, Clone, PartialEq)]
pub struct DappRow {
    pub name: &'static str,
    pub category: &'static str,
    pub users: &'static str,
    pub tvl: &'static str,
}

/// Everything the home view displays.
#[derive(Debug, Clone)]
pub struct HomeContent {
    pub stats: Vec<MarketStat>,
    pub tokens: Vec<MarketToken>,
    pub activity: Vec<ActivityRow>,
    pub dapps: Vec<DappRow>,
}

impl HomeContent {
    pub fn demo() -> Self {
        Self {
            stats: vec![
                MarketStat { label: "Total Value", value: "$1,245,890", change: "+2.3%" },
                MarketStat { label: "24h Volume", value: "$845.2M", change: "+5.1%" },
                MarketStat { label: "Active Users", value: "89.2K", change: "+1.8%" },
                MarketStat { label: "Gas Price", value: "32 Gwei", change: "-0.5%" },
            ],
            tokens: vec![
                MarketToken { name: "Ethereum", symbol: "ETH", price: "$3,300.50", change: "+2.5%", volume: "$12.4B" },
                MarketToken { name: "Bitcoin", symbol: "BTC", price: "$67,890.20", change: "+1.2%", volume: "$24.8B" },
                MarketToken { name: "USDC", symbol: "USDC", price: "$1.00", change: "0.0%", volume: "$8.2B" },
                MarketToken { name: "Solana", symbol: "SOL", price: "$145.80", change: "-0.8%", volume: "$3.5B" },
            ],
            activity: vec![
                ActivityRow { hash: "0x7f3a...c8d2", kind: "Swap", amount: "2.5 ETH", time: "2 min ago", status: TxStatus::Confirmed },
                ActivityRow { hash: "0x9b1e...f5a7", kind: "Transfer", amount: "1500 USDC", time: "5 min ago", status: TxStatus::Pending },
                ActivityRow { hash: "0x3c8d...b2a9", kind: "Stake", amount: "50 SOL", time: "12 min ago", status: TxStatus::Confirmed },
                ActivityRow { hash: "0x5a2b...d8c4", kind: "Mint", amount: "NFT", time: "25 min ago", status: TxStatus::Failed },
            ],
            dapps: vec![
                DappRow { name: "Uniswap", category: "DEX", users: "1.2M", tvl: "$4.5B" },
                DappRow { name: "Aave", category: "Lending", users: "850K", tvl: "$12.8B" },
                DappRow { name: "OpenSea", category: "NFT", users: "2.1M", tvl: "$1.2B" },
            ],
        }
    }
}
