//! Network activity bar chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::models::ActivityPoint;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_CHART, COLOR_DIM, COLOR_LABEL};

/// Range buttons shown next to the chart title. Only the 24H series exists.
const RANGES: [&str; 3] = ["24H", "7D", "30D"];

pub fn render(frame: &mut Frame, area: Rect, activity: &[ActivityPoint]) {
    let mut title = vec![Span::styled(
        "Network Activity ",
        Style::default().fg(COLOR_LABEL),
    )];
    for (i, range) in RANGES.iter().enumerate() {
        let style = if i == 0 {
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        title.push(Span::styled(format!(" {} ", range), style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(title));

    let bars: Vec<Bar> = activity
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.tps)
                .label(Line::from(point.label.clone()))
                .text_value(point.tps.to_string())
                .style(Style::default().fg(COLOR_CHART))
                .value_style(Style::default().fg(COLOR_ACCENT).bg(COLOR_CHART))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = activity.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 7);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}
