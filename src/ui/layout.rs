//! Layout management and calculations

use crate::constants::HEADER_HEIGHT;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the row holding the floating add control
pub const ADD_BUTTON_ROW_HEIGHT: u16 = 3;

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub list: Rect,
    pub add_button: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into date header, list, add control row and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(ADD_BUTTON_ROW_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            list: chunks[1],
            add_button: chunks[2],
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Center a fixed-width rectangle horizontally inside `r`, keeping its height
    #[must_use]
    pub fn centered_columns(width: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let x = r.x + (r.width - width) / 2;
        Rect::new(x, r.y, width, r.height)
    }

    /// Whether the terminal cell at (`column`, `row`) lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
