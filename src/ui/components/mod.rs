//! Reusable UI components

pub mod add_button;
pub mod date_header;
pub mod dialogs;
pub mod status_bar;

// Component architecture
pub mod add_todo_dialog;
pub mod todo_list_component;

// Component exports
pub use add_button::AddButton;
pub use add_todo_dialog::{AddTodoDialog, FormField};
pub use date_header::DateHeader;
pub use status_bar::StatusBar;
pub use todo_list_component::TodoListComponent;
