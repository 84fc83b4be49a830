//! Floating add control

use crate::constants::ADD_BUTTON_LABEL;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button opening the add-entry dialog
pub struct AddButton;

impl AddButton {
    /// Render the button centered in `area` and return the clickable rectangle
    pub fn render(f: &mut Frame, area: Rect, icons: &IconService) -> Rect {
        let label = format!(" {} {} ", icons.add(), ADD_BUTTON_LABEL);
        // Label plus borders
        let width = Span::raw(label.as_str()).width() as u16 + 2;
        let button_area = LayoutManager::centered_columns(width, area);

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Rgb(91, 81, 226))),
            );

        f.render_widget(button, button_area);
        button_area
    }
}
