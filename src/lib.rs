//! daylist - a daily to-do list for the terminal
//!
//! This library renders a date header, the day's to-do entries with
//! priority-colored bars and checkboxes, and a modal dialog for adding
//! entries. Everything is kept in memory for the current session.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`todo`] - Entry, draft and priority types
//! * [`state`] - The in-memory entry collection
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date and color helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// File logging setup
pub mod logger;

/// In-memory to-do collection
pub mod state;

/// To-do entry model
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and colors
pub mod utils;

pub use state::TodoList;
pub use todo::{Priority, TodoDraft, TodoEntry, TodoId};
