//! Color theme constants for the blockdash UI
//!
//! Defines the dark palette and the total color mappings used for
//! transaction status and token accents.

use ratatui::style::Color;

use crate::models::{Network, TxStatus};

// ============================================================================
// Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Labels on cards and table headers
pub const COLOR_LABEL: Color = Color::Gray;

/// Positive change / success
pub const COLOR_POSITIVE: Color = Color::Rgb(16, 185, 129); // #10b981

/// Negative change / error
pub const COLOR_NEGATIVE: Color = Color::Rgb(239, 68, 68); // #ef4444

/// Warning (stale data, discrepancies)
pub const COLOR_WARNING: Color = Color::Rgb(245, 158, 11); // #f59e0b

/// Brand purple used for the title and selected tab
pub const COLOR_BRAND: Color = Color::Rgb(139, 92, 246); // #8b5cf6

/// Activity chart bars
pub const COLOR_CHART: Color = Color::Rgb(99, 102, 241); // #6366f1

/// Neutral fallback for values without a dedicated color
pub const COLOR_NEUTRAL: Color = Color::Rgb(107, 114, 128); // #6b7280

// ============================================================================
// Status Colors
// ============================================================================

/// Color for a transaction status. Unrecognized statuses get the neutral gray.
pub fn status_color(status: TxStatus) -> Color {
    match status {
        TxStatus::Confirmed => COLOR_POSITIVE,
        TxStatus::Pending => COLOR_WARNING,
        TxStatus::Failed => COLOR_NEGATIVE,
        TxStatus::Unrecognized => COLOR_NEUTRAL,
    }
}

// ============================================================================
// Token Colors
// ============================================================================

/// Accent color for a token symbol. Unknown symbols get the brand purple.
pub fn token_color(symbol: &str) -> Color {
    match symbol {
        "ETH" => Color::Rgb(98, 126, 234),  // #627eea
        "USDC" => Color::Rgb(39, 117, 202), // #2775ca
        "UNI" => Color::Rgb(255, 0, 122),   // #ff007a
        _ => COLOR_BRAND,
    }
}

/// Accent for the network selector
pub fn network_color(network: Network) -> Color {
    match network {
        Network::Ethereum => Color::Rgb(98, 126, 234),
        Network::Polygon => Color::Rgb(130, 71, 229),
        Network::Arbitrum => Color::Rgb(40, 160, 240),
        Network::Optimism => Color::Rgb(255, 4, 32),
    }
}
