//! To-do entry model
//!
//! Entries are created once from a [`TodoDraft`] and never edited afterwards,
//! except for their completion flag which only [`crate::state::TodoList`] may flip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the owning collection
pub type TodoId = u32;

/// Priority of a to-do entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Returned when a priority label is not one of `high`, `medium` or `low`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority '{0}', expected high, medium or low")]
pub struct ParsePriorityError(pub String);

impl Priority {
    /// All priorities in selector order
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Lowercase label, as stored and parsed
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized label for the selector
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Next priority in selector order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Previous priority in selector order, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

/// Field values of an entry before it is assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
    /// `None` when the creator opted out of a deadline
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>, deadline: Option<NaiveDate>, priority: Priority) -> Self {
        Self {
            text: text.into(),
            deadline,
            priority,
        }
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    id: TodoId,
    text: String,
    priority: Priority,
    deadline: Option<NaiveDate>,
    completed: bool,
}

impl TodoEntry {
    pub(crate) fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            text: draft.text,
            priority: draft.priority,
            deadline: draft.deadline,
            completed: false,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    #[must_use]
    pub fn id(&self) -> TodoId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
