//! Presentation helpers that turn store values into display strings.
//!
//! All functions are total: any finite input gives a string.

/// Currency with magnitude suffix.
///
/// Values of a billion or more use `B`, a million `M`, a thousand `K`, each
/// with one decimal; smaller values keep two decimals.
///
/// ```
/// use blockdash::ui::format::format_currency;
///
/// assert_eq!(format_currency(1_500_000_000.0), "$1.5B");
/// assert_eq!(format_currency(42.5), "$42.50");
/// ```
pub fn format_currency(value: f64) -> String {
    if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else {
        format!("${:.2}", value)
    }
}

/// Integer with thousands separators (`1456789` -> `1,456,789`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with separators and cents (`8250.5` -> `$8,250.50`)
pub fn format_usd(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u64;
    format!("${}.{:02}", format_thousands(cents / 100), cents % 100)
}

/// First eight characters, an ellipsis, then the last four.
///
/// Addresses too short to shorten are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Unit a transaction value is shown in; large values are stablecoin transfers.
pub fn tx_value_unit(value: f64) -> &'static str {
    if value > 100.0 {
        "USDC"
    } else {
        "ETH"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_magnitudes() {
        assert_eq!(format_currency(1_500_000_000.0), "$1.5B");
        assert_eq!(format_currency(2_500_000.0), "$2.5M");
        assert_eq!(format_currency(1_200.0), "$1.2K");
        assert_eq!(format_currency(42.5), "$42.50");
    }

    #[test]
    fn test_format_currency_boundaries() {
        assert_eq!(format_currency(425e9), "$425.0B");
        assert_eq!(format_currency(1e9), "$1.0B");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_456_789), "1,456,789");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(8250.5), "$8,250.50");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x742d35Cc6634C0532925a3b844Bc9eE0a43C3d97"),
            "0x742d35...3d97"
        );
        assert_eq!(short_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_tx_value_unit() {
        assert_eq!(tx_value_unit(1500.0), "USDC");
        assert_eq!(tx_value_unit(100.0), "ETH");
        assert_eq!(tx_value_unit(1.5), "ETH");
    }
}
