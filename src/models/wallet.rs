//! Wallet snapshot and token holdings.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A single token position inside a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    pub symbol: String,
    pub balance: f64,
    /// Position value in USD
    pub value: f64,
}

impl TokenHolding {
    pub fn new(symbol: impl Into<String>, balance: f64, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            balance,
            value,
        }
    }
}

/// The authenticated wallet as shown in the wallet card.
///
/// `value_usd` is priced independently of the token list and is not
/// reconciled against it; see [`WalletSnapshot::value_discrepancy`].
///
/// Token symbols are unique within a wallet. Deserialization goes through
/// [`WalletSnapshot::new`], so a payload listing a symbol twice fails.
///
/// # Example
///
/// ```
/// use blockdash::models::WalletSnapshot;
///
/// let json = r#"{"address":"0xabc","balance":1.0,"valueUSD":10.0,"tokens":[
///     {"symbol":"ETH","balance":1.0,"value":5.0},
///     {"symbol":"ETH","balance":2.0,"value":5.0}
/// ]}"#;
/// assert!(serde_json::from_str::<WalletSnapshot>(json).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWallet")]
pub struct WalletSnapshot {
    address: String,
    balance: f64,
    #[serde(rename = "valueUSD")]
    value_usd: f64,
    tokens: Vec<TokenHolding>,
}

/// Wire shape of a wallet before the token list is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWallet {
    address: String,
    balance: f64,
    #[serde(rename = "valueUSD")]
    value_usd: f64,
    #[serde(default)]
    tokens: Vec<TokenHolding>,
}

impl TryFrom<RawWallet> for WalletSnapshot {
    type Error = DashboardError;

    fn try_from(raw: RawWallet) -> Result<Self, Self::Error> {
        WalletSnapshot::new(raw.address, raw.balance, raw.value_usd, raw.tokens)
    }
}

impl WalletSnapshot {
    /// Build a wallet, rejecting duplicate token symbols.
    pub fn new(
        address: impl Into<String>,
        balance: f64,
        value_usd: f64,
        tokens: Vec<TokenHolding>,
    ) -> Result<Self, DashboardError> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(token.symbol.as_str()) {
                return Err(DashboardError::DuplicateTokenSymbol {
                    symbol: token.symbol.clone(),
                });
            }
        }
        Ok(Self {
            address: address.into(),
            balance,
            value_usd,
            tokens,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Native balance in ETH
    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn value_usd(&self) -> f64 {
        self.value_usd
    }

    pub fn tokens(&self) -> &[TokenHolding] {
        &self.tokens
    }

    /// Sum of the individual token position values.
    pub fn token_total(&self) -> f64 {
        self.tokens.iter().map(|t| t.value).sum()
    }

    /// Difference between the token sum and the reported USD value, when it
    /// exceeds one cent.
    pub fn value_discrepancy(&self) -> Option<f64> {
        let diff = self.token_total() - self.value_usd;
        if diff.abs() >= 0.01 {
            Some(diff)
        } else {
            None
        }
    }

    /// Share of the token sum held in `symbol`, in percent.
    pub fn token_share(&self, symbol: &str) -> f64 {
        let total = self.token_total();
        if total <= 0.0 {
            return 0.0;
        }
        self.tokens
            .iter()
            .find(|t| t.symbol == symbol)
            .map(|t| t.value / total * 100.0)
            .unwrap_or(0.0)
    }
}
