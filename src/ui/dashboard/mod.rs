//! Dashboard UI module
//!
//! Composes the dashboard components from a borrowed
//! [`DashboardViewState`]. Nothing here mutates state.

pub mod activity;
pub mod footer;
pub mod header;
pub mod stats;
pub mod tables;
pub mod wallet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM};
use crate::view_state::DashboardViewState;

// ============================================================================
// Main Dashboard Rendering
// ============================================================================

/// Render the complete dashboard view
///
/// # Layout
/// ```text
/// +------------------------------------------+
/// | HEADER: title, network, refresh          |
/// +------------------------------------------+
/// | SEARCH                                   |
/// +------------------------------------------+
/// | STAT CARDS x4                            |
/// +---------------------------+--------------+
/// | ACTIVITY CHART            | WALLET       |
/// | TX / BLOCK TABLE          | NET STATUS   |
/// +---------------------------+--------------+
/// | FOOTER: hints              status        |
/// +------------------------------------------+
/// ```
pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewState, search_active: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(frame, rows[0], view);
    render_search(frame, rows[1], view, search_active);
    stats::render(frame, rows[2], view.stats, view.has_stats());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(rows[3]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(columns[0]);

    activity::render(frame, left[0], view.activity);
    tables::render(frame, left[1], view);
    wallet::render(frame, columns[1], view.wallet, view.stats);

    footer::render(frame, rows[4], view, search_active);
}

fn render_search(frame: &mut Frame, area: Rect, view: &DashboardViewState, search_active: bool) {
    let border = if search_active { COLOR_BRAND } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let text = &view.selection.search_text;
    let line = if text.is_empty() && !search_active {
        Line::from(Span::styled(
            "/ Search by address, transaction hash, or block number",
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        let mut spans = vec![
            Span::styled("/ ", Style::default().fg(COLOR_DIM)),
            Span::styled(text.clone(), Style::default().fg(COLOR_ACCENT)),
        ];
        if search_active {
            spans.push(Span::styled("▏", Style::default().fg(COLOR_BRAND)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
