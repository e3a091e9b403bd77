//! Statistic cards row.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::StatisticsSnapshot;
use crate::ui::format::format_thousands;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LABEL, COLOR_NEGATIVE, COLOR_POSITIVE};

/// One card's content
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: Option<(&'static str, Color)>,
}

/// The four headline cards for a snapshot.
///
/// Before the first snapshot arrives every value shows a placeholder.
pub fn stat_cards(stats: &StatisticsSnapshot, loaded: bool) -> [StatCard; 4] {
    let value = |text: String| if loaded { text } else { "--".to_string() };
    [
        StatCard {
            title: "Total Transactions",
            value: value(format_thousands(stats.total_transactions)),
            change: Some(("↑ 2.5%", COLOR_POSITIVE)),
        },
        StatCard {
            title: "Active Addresses",
            value: value(format_thousands(stats.active_addresses)),
            change: Some(("↑ 1.8%", COLOR_POSITIVE)),
        },
        StatCard {
            title: "Network Hashrate",
            value: value(format!("{} TH/s", stats.network_hashrate)),
            change: None,
        },
        StatCard {
            title: "Gas Price",
            value: value(format!("{} Gwei", stats.gas_price)),
            change: Some(("↑ 5.2%", COLOR_NEGATIVE)),
        },
    ]
}

pub fn render(frame: &mut Frame, area: Rect, stats: &StatisticsSnapshot, loaded: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (card, column) in stat_cards(stats, loaded).iter().zip(columns.iter()) {
        render_card(frame, *column, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(card.title, Style::default().fg(COLOR_LABEL)));

    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ))];
    match card.change {
        Some((text, color)) => lines.push(Line::from(Span::styled(text, Style::default().fg(color)))),
        None => lines.push(Line::from(Span::styled(" ", Style::default().fg(COLOR_DIM)))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StatisticsSnapshot {
        StatisticsSnapshot {
            total_transactions: 1_456_789,
            active_addresses: 89_234,
            network_hashrate: 245.6,
            avg_block_time: 12.3,
            gas_price: 50,
            market_cap: 425e9,
        }
    }

    #[test]
    fn test_card_values() {
        let cards = stat_cards(&snapshot(), true);
        assert_eq!(cards[0].value, "1,456,789");
        assert_eq!(cards[1].value, "89,234");
        assert_eq!(cards[2].value, "245.6 TH/s");
        assert_eq!(cards[3].value, "50 Gwei");
        assert!(cards[2].change.is_none());
    }

    #[test]
    fn test_placeholder_before_first_snapshot() {
        let cards = stat_cards(&StatisticsSnapshot::default(), false);
        assert!(cards.iter().all(|c| c.value == "--"));
    }
}
