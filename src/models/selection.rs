//! UI selection state: active network, active tab, search text.

use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Network the dashboard is monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Ethereum,
    Polygon,
    Arbitrum,
    Optimism,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Ethereum,
        Network::Polygon,
        Network::Arbitrum,
        Network::Optimism,
    ];

    /// Identifier used in config and intents
    pub fn id(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Polygon => "polygon",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
            Network::Arbitrum => "Arbitrum",
            Network::Optimism => "Optimism",
        }
    }

    /// Cycle to the next network
    pub fn next(&self) -> Self {
        match self {
            Network::Ethereum => Network::Polygon,
            Network::Polygon => Network::Arbitrum,
            Network::Arbitrum => Network::Optimism,
            Network::Optimism => Network::Ethereum,
        }
    }

    /// Cycle to the previous network
    pub fn prev(&self) -> Self {
        match self {
            Network::Ethereum => Network::Optimism,
            Network::Polygon => Network::Ethereum,
            Network::Arbitrum => Network::Polygon,
            Network::Optimism => Network::Arbitrum,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|n| n.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::InvalidSelection {
                kind: "network",
                value: s.to_string(),
            })
    }
}

/// Which table is visible in the lower card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Transactions,
    Blocks,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Transactions => "transactions",
            Tab::Blocks => "blocks",
        }
    }

    /// Tab header text
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Transactions => "Recent Transactions",
            Tab::Blocks => "Recent Blocks",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Tab::Transactions => Tab::Blocks,
            Tab::Blocks => Tab::Transactions,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactions" => Ok(Tab::Transactions),
            "blocks" => Ok(Tab::Blocks),
            _ => Err(DashboardError::InvalidSelection {
                kind: "tab",
                value: s.to_string(),
            }),
        }
    }
}

/// Everything the user has selected on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSelection {
    pub network: Network,
    pub tab: Tab,
    pub search_text: String,
    pub is_refreshing: bool,
}
