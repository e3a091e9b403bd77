//! Footer: key hints on the left, refresh status on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_POSITIVE, COLOR_WARNING};
use crate::view_state::{DashboardViewState, FooterStatus};

/// Context-aware key hints
pub fn get_footer_hint(search_active: bool) -> &'static str {
    if search_active {
        "type to filter · enter done · esc clear"
    } else {
        "r refresh · tab switch · n network · / search · c copy · h home · q quit"
    }
}

/// Text and color of the status slot
pub fn status_text(view: &DashboardViewState) -> (String, ratatui::style::Color) {
    match view.footer_status() {
        FooterStatus::Notice(notice) => (notice.to_string(), COLOR_ACCENT),
        FooterStatus::Stale(error) => (format!("⚠ {}", error.user_message()), COLOR_WARNING),
        FooterStatus::Updated(at) => (
            format!("Updated {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
            COLOR_POSITIVE,
        ),
        FooterStatus::Waiting => ("Waiting for first snapshot".to_string(), COLOR_DIM),
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &DashboardViewState, search_active: bool) {
    let (status, color) = status_text(view);
    let status_width = (unicode_width::UnicodeWidthStr::width(status.as_str()) as u16 + 1)
        .min(area.width / 2);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(status_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            get_footer_hint(search_active),
            Style::default().fg(COLOR_DIM),
        ))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status, Style::default().fg(color))))
            .alignment(Alignment::Right),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_hint() {
        assert!(get_footer_hint(true).contains("esc clear"));
        assert!(get_footer_hint(false).contains("r refresh"));
    }
}
