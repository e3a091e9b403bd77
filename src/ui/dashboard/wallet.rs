//! Wallet balance card and network status card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::{StatisticsSnapshot, WalletSnapshot};
use crate::ui::format::{format_currency, format_usd, short_address};
use crate::ui::theme::{
    token_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LABEL, COLOR_POSITIVE, COLOR_WARNING,
};

/// Sync progress shown in the network status card
const SYNC_PERCENT: u16 = 95;
/// Connected peers shown in the network status card
const PEERS: u32 = 42;

pub fn render(frame: &mut Frame, area: Rect, wallet: &WalletSnapshot, stats: &StatisticsSnapshot) {
    let status_height = 7;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(status_height)])
        .split(area);

    render_wallet(frame, rows[0], wallet);
    render_network_status(frame, rows[1], stats);
}

/// Lines of the wallet card body
pub fn wallet_lines(wallet: &WalletSnapshot) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            short_address(wallet.address()),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            format_usd(wallet.value_usd()),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} ETH", wallet.balance()),
            Style::default().fg(COLOR_LABEL),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Token Distribution",
            Style::default().fg(COLOR_LABEL),
        )),
    ];

    for token in wallet.tokens() {
        let share = wallet.token_share(&token.symbol);
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(token_color(&token.symbol))),
            Span::styled(
                format!("{:<5}", token.symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} {} ", token.balance, token.symbol)),
            Span::styled(format_usd(token.value), Style::default().fg(COLOR_DIM)),
            Span::styled(format!(" {:.0}%", share), Style::default().fg(COLOR_DIM)),
        ]));
    }

    if let Some(diff) = wallet.value_discrepancy() {
        lines.push(Line::from(Span::styled(
            format!("⚠ tokens differ from total by {}", format_usd(diff.abs())),
            Style::default().fg(COLOR_WARNING),
        )));
    }

    lines
}

fn render_wallet(frame: &mut Frame, area: Rect, wallet: &WalletSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(vec![
            Span::styled("Wallet Balance ", Style::default().fg(COLOR_LABEL)),
            Span::styled("[c] copy", Style::default().fg(COLOR_DIM)),
        ]));

    frame.render_widget(Paragraph::new(wallet_lines(wallet)).block(block), area);
}

fn render_network_status(frame: &mut Frame, area: Rect, stats: &StatisticsSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled("Network Status", Style::default().fg(COLOR_LABEL)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(COLOR_DIM)),
            Span::styled("● ", Style::default().fg(COLOR_POSITIVE)),
            Span::raw("Online"),
            Span::styled("   Peers: ", Style::default().fg(COLOR_DIM)),
            Span::raw(PEERS.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Block time: ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{}s", stats.avg_block_time)),
        ]),
        Line::from(vec![
            Span::styled("Market cap: ", Style::default().fg(COLOR_DIM)),
            Span::raw(format_currency(stats.market_cap)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_POSITIVE))
        .label(format!("Sync {}%", SYNC_PERCENT))
        .percent(SYNC_PERCENT);
    frame.render_widget(gauge, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::demo_wallet;
    use crate::models::TokenHolding;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wallet_lines_show_address_and_tokens() {
        let wallet = demo_wallet().unwrap();
        let rendered = text(&wallet_lines(&wallet));
        assert!(rendered.contains("0x742d35...3d97"));
        assert!(rendered.contains("$8,250.50"));
        assert!(rendered.contains("2.5 ETH"));
        assert!(rendered.contains("USDC"));
        assert!(rendered.contains("UNI"));
    }

    #[test]
    fn test_discrepancy_is_flagged_not_fixed() {
        let wallet = demo_wallet().unwrap();
        let rendered = text(&wallet_lines(&wallet));
        assert!(rendered.contains("tokens differ from total by $1,825.00"));
        assert!(rendered.contains("$8,250.50"));
    }

    #[test]
    fn test_consistent_wallet_has_no_warning() {
        let wallet = WalletSnapshot::new(
            "0x0000000000000000000000000000000000000001",
            1.0,
            100.0,
            vec![TokenHolding::new("ETH", 1.0, 100.0)],
        )
        .unwrap();
        assert!(!text(&wallet_lines(&wallet)).contains("differ"));
    }
}
