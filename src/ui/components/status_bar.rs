//! Status bar component

use crate::constants::{STATUS_HINTS_DIALOG, STATUS_HINTS_LIST};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown in the status bar
    #[must_use]
    pub fn status_text(dialog_open: bool, completed: usize, total: usize) -> String {
        if dialog_open {
            STATUS_HINTS_DIALOG.to_string()
        } else {
            format!("{}/{} done • {}", completed, total, STATUS_HINTS_LIST)
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, dialog_open: bool, completed: usize, total: usize) {
        let status_color = if dialog_open { Color::Cyan } else { Color::Gray };

        let status_bar = Paragraph::new(Self::status_text(dialog_open, completed, total))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
