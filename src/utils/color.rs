use crate::todo::Priority;
use ratatui::style::Color;

/// Bar color for high priority entries
pub const HIGH_PRIORITY_COLOR: Color = Color::Rgb(220, 94, 94);
/// Bar color for medium priority entries
pub const MEDIUM_PRIORITY_COLOR: Color = Color::Rgb(220, 209, 94);
/// Bar color for low priority entries
pub const LOW_PRIORITY_COLOR: Color = Color::Rgb(109, 220, 94);
/// Bar color for labels that are not a known priority
pub const NEUTRAL_PRIORITY_COLOR: Color = Color::DarkGray;

/// Convert a priority label to its bar color
#[must_use]
pub fn priority_color(priority: &str) -> Color {
    match priority.parse::<Priority>() {
        Ok(Priority::High) => HIGH_PRIORITY_COLOR,
        Ok(Priority::Medium) => MEDIUM_PRIORITY_COLOR,
        Ok(Priority::Low) => LOW_PRIORITY_COLOR,
        Err(_) => NEUTRAL_PRIORITY_COLOR,
    }
}
