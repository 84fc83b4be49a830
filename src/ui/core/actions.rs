use crate::todo::{TodoDraft, TodoId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SelectNext,
    SelectPrevious,
    Select(usize),

    // Entry operations
    ToggleCompletion(TodoId),
    CommitNewEntry(TodoDraft),

    // Dialog operations
    OpenDialog,
    CloseDialog,

    // UI operations
    CycleIconTheme,

    // App control
    Quit,
    None,
}
