//! Date header component

use crate::config::DisplayConfig;
use crate::utils::datetime::format_with;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Year/month and day/weekday lines for the current date
pub struct DateHeader;

impl DateHeader {
    /// Header lines for `today` using the configured formats
    #[must_use]
    pub fn lines(today: NaiveDate, display: &DisplayConfig) -> (String, String) {
        (
            format_with(today, &display.month_format),
            format_with(today, &display.day_format),
        )
    }

    /// Render the date header
    pub fn render(f: &mut Frame, area: Rect, today: NaiveDate, display: &DisplayConfig) {
        let (month_line, day_line) = Self::lines(today, display);

        let text = vec![
            Line::from(Span::styled(
                month_line,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(day_line, Style::default().fg(Color::Gray))),
        ];

        let header = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::new(1, 1, 1, 0)),
        );

        f.render_widget(header, area);
    }
}
