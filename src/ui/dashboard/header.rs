//! Dashboard header component
//!
//! Title and network subtitle on the left, network selector and refresh
//! control on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Network;
use crate::ui::theme::{network_color, COLOR_BRAND, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};
use crate::view_state::DashboardViewState;

/// Render the dashboard header
///
/// # Layout
/// ```text
/// Blockchain Dashboard                  [r] Refresh
/// Real-time monitoring for Ethereum     Ethereum  Polygon  Arbitrum  Optimism
/// ```
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewState) {
    if area.height < 2 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(area);

    let network = view.selection.network;
    let left = vec![
        Line::from(Span::styled(
            "Blockchain Dashboard",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Real-time monitoring for {}", network.display_name()),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(left), columns[0]);

    let right = vec![refresh_line(view), network_selector_line(network)];
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        columns[1],
    );
}

fn refresh_line(view: &DashboardViewState) -> Line<'static> {
    if view.can_refresh() {
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                view.refresh_label(),
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            view.refresh_label(),
            Style::default()
                .fg(COLOR_WARNING)
                .add_modifier(Modifier::ITALIC),
        ))
    }
}

/// Network names with the active one highlighted
pub fn network_selector_line(active: Network) -> Line<'static> {
    let mut spans = Vec::with_capacity(Network::ALL.len() * 2);
    for (i, network) in Network::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *network == active {
            Style::default()
                .fg(network_color(*network))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(network.display_name(), style));
    }
    Line::from(spans)
}
