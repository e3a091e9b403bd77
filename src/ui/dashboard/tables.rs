//! Recent transactions / recent blocks tabbed table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{BlockRecord, Tab, TransactionRecord};
use crate::ui::format::tx_value_unit;
use crate::ui::theme::{status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_LABEL};
use crate::view_state::DashboardViewState;

/// Tab strip with the active tab highlighted
pub fn tab_title(active: Tab) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tab) in [Tab::Transactions, Tab::Blocks].iter().enumerate() {
        let style = if *tab == active {
            Style::default()
                .fg(COLOR_BRAND)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.title()), style));
    }
    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(tab_title(view.active_tab()));

    if view.visible_rows() == 0 {
        let message = if view.is_searching() {
            format!("No matches for \"{}\"", view.selection.search_text.trim())
        } else {
            "Nothing to show".to_string()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(COLOR_DIM))).block(block),
            area,
        );
        return;
    }

    match view.active_tab() {
        Tab::Transactions => render_transactions(frame, area, block, &view.filtered_transactions()),
        Tab::Blocks => render_blocks(frame, area, block, &view.filtered_blocks()),
    }
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(COLOR_LABEL).add_modifier(Modifier::BOLD))
}

fn render_transactions(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    transactions: &[&TransactionRecord],
) {
    let rows = transactions.iter().map(|tx| {
        Row::new(vec![
            Cell::from(tx.hash.clone()).style(Style::default().fg(COLOR_ACCENT)),
            Cell::from(tx.from.clone()),
            Cell::from(tx.to.clone()),
            Cell::from(format!("{} {}", tx.value, tx_value_unit(tx.value))),
            Cell::from(tx.status.label()).style(Style::default().fg(status_color(tx.status))),
            Cell::from(tx.timestamp.clone()).style(Style::default().fg(COLOR_DIM)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header(&["Hash", "From", "To", "Value", "Status", "Time"]))
    .block(block);

    frame.render_widget(table, area);
}

fn render_blocks(frame: &mut Frame, area: Rect, block: Block, blocks: &[&BlockRecord]) {
    let rows = blocks.iter().map(|b| {
        Row::new(vec![
            Cell::from(format!("#{}", b.number)).style(Style::default().fg(COLOR_ACCENT)),
            Cell::from(b.timestamp.clone()).style(Style::default().fg(COLOR_DIM)),
            Cell::from(b.transactions.to_string()),
            Cell::from(b.miner.clone()),
            Cell::from(format!("{} KB", b.size_kb)),
            Cell::from(format!("{} ETH", b.reward)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Min(8),
        ],
    )
    .header(header(&["Block", "Time", "Txns", "Miner", "Size", "Reward"]))
    .block(block);

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_title_marks_active() {
        let line = tab_title(Tab::Blocks);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " 1 Recent Transactions  2 Recent Blocks ");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
