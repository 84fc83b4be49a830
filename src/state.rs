//! In-memory to-do collection
//!
//! The collection lives for one session only. Ids are derived from the current
//! length, which is safe because entries are never removed.

use crate::constants::SAMPLE_ENTRIES;
use crate::todo::{TodoDraft, TodoEntry, TodoId};

/// Ordered collection of entries; insertion order is display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    entries: Vec<TodoEntry>,
}

impl TodoList {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded with the sample entries shown on startup
    pub fn seeded() -> Self {
        let mut list = Self::new();
        for (text, priority) in SAMPLE_ENTRIES {
            list.commit_new_entry(TodoDraft::new(text, None, priority));
        }
        list
    }

    pub fn entries(&self) -> &[TodoEntry] {
        &self.entries
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed entries
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_completed()).count()
    }

    /// Id the next committed entry will receive
    pub fn next_id(&self) -> TodoId {
        TodoId::try_from(self.entries.len()).map_or(TodoId::MAX, |len| len.saturating_add(1))
    }

    /// Flip the completion flag of `id`.
    ///
    /// Returns the new flag, or `None` when no entry has that id.
    pub fn toggle_completion(&mut self, id: TodoId) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|entry| entry.id() == id)?;
        entry.toggle();
        Some(entry.is_completed())
    }

    /// Append a new entry built from `draft` and return its id
    pub fn commit_new_entry(&mut self, draft: TodoDraft) -> TodoId {
        let id = self.next_id();
        self.entries.push(TodoEntry::from_draft(id, draft));
        id
    }
}
