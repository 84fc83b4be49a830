//! Constants used throughout the application
//!
//! This module centralizes UI text, sample data and other constant values
//! to improve maintainability and consistency.

use crate::todo::Priority;

// Sample entries seeded into a fresh session
pub const SAMPLE_ENTRIES: [(&str, Priority); 3] = [
    ("Study React", Priority::High),
    ("Prepare lunch", Priority::Medium),
    ("Exercise", Priority::Low),
];

// Dialog text
pub const DIALOG_TITLE_ADD_TODO: &str = " Add New Todo ";
pub const FIELD_TITLE: &str = "Todo Title";
pub const FIELD_HAS_DEADLINE: &str = "Has Deadline";
pub const FIELD_DEADLINE: &str = "Deadline";
pub const FIELD_PRIORITY: &str = "Priority";
pub const TITLE_PLACEHOLDER: &str = "Enter your task";
pub const SUBMIT_LABEL: &str = "Add Todo";

// Main view text
pub const LIST_TITLE: &str = "Todos";
pub const EMPTY_LIST_MESSAGE: &str = "Nothing to do today";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const STATUS_HINTS_LIST: &str = "j/k: move • Space: check • a: add • q: quit";
pub const STATUS_HINTS_DIALOG: &str = "Tab: next field • Enter: add • Esc: cancel";

// Config and logging
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_DIR_NAME: &str = "daylist";
pub const LOCAL_CONFIG_FILE: &str = "daylist.toml";
pub const LOG_FILE_NAME: &str = "daylist.log";

// UI Layout Constants
/// Width of the add-entry dialog in percent of the screen
pub const DIALOG_WIDTH_PERCENT: u16 = 60;
/// Height of the date header block in lines
pub const HEADER_HEIGHT: u16 = 4;
/// Width of the checkbox column in the list
pub const CHECKBOX_WIDTH: u16 = 3;
