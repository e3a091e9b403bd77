//! Home view: static market overview.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::HomeContent;
use crate::ui::theme::{
    status_color, token_color, COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER,
    COLOR_LABEL, COLOR_NEGATIVE, COLOR_POSITIVE,
};

fn change_color(change: &str) -> ratatui::style::Color {
    if change.starts_with('-') {
        COLOR_NEGATIVE
    } else if change.starts_with('+') {
        COLOR_POSITIVE
    } else {
        COLOR_DIM
    }
}

fn card(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_LABEL)))
}

pub fn render(frame: &mut Frame, area: Rect, home: &HomeContent) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "Web3 Market Overview",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Markets, activity and trending dApps",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(title), rows[0]);

    render_stats(frame, rows[1], home);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    render_tokens(frame, columns[0], home);
    render_activity(frame, right[0], home);
    render_dapps(frame, right[1], home);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("d", Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)),
            Span::styled(" open dashboard · q quit", Style::default().fg(COLOR_DIM)),
        ])),
        rows[3],
    );
}

fn render_stats(frame: &mut Frame, area: Rect, home: &HomeContent) {
    let count = home.stats.len().max(1) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, column) in home.stats.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                stat.value,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                stat.change,
                Style::default().fg(change_color(stat.change)),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(card(stat.label)), *column);
    }
}

fn render_tokens(frame: &mut Frame, area: Rect, home: &HomeContent) {
    let rows = home.tokens.iter().map(|token| {
        Row::new(vec![
            Cell::from(Line::from(vec![
                Span::styled("● ", Style::default().fg(token_color(token.symbol))),
                Span::raw(token.name),
            ])),
            Cell::from(token.symbol).style(Style::default().fg(COLOR_DIM)),
            Cell::from(token.price),
            Cell::from(token.change).style(Style::default().fg(change_color(token.change))),
            Cell::from(token.volume).style(Style::default().fg(COLOR_DIM)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(["Token", "Symbol", "Price", "24h", "Volume"])
            .style(Style::default().fg(COLOR_LABEL).add_modifier(Modifier::BOLD)),
    )
    .block(card("Top Tokens"));

    frame.render_widget(table, area);
}

fn render_activity(frame: &mut Frame, area: Rect, home: &HomeContent) {
    let rows = home.activity.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.hash).style(Style::default().fg(COLOR_ACCENT)),
            Cell::from(row.kind),
            Cell::from(row.amount),
            Cell::from(row.status.label()).style(Style::default().fg(status_color(row.status))),
            Cell::from(row.time).style(Style::default().fg(COLOR_DIM)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(8),
        ],
    )
    .block(card("Recent Activity"));

    frame.render_widget(table, area);
}

fn render_dapps(frame: &mut Frame, area: Rect, home: &HomeContent) {
    let rows = home.dapps.iter().map(|dapp| {
        Row::new(vec![
            Cell::from(dapp.name).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(dapp.category).style(Style::default().fg(COLOR_DIM)),
            Cell::from(format!("{} users", dapp.users)),
            Cell::from(format!("TVL {}", dapp.tvl)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Min(10),
        ],
    )
    .block(card("Trending dApps"));

    frame.render_widget(table, area);
}
