use crate::config::Config;
use crate::icons::IconService;
use crate::state::TodoList;
use crate::todo::{TodoDraft, TodoEntry, TodoId};
use crate::ui::components::{AddButton, AddTodoDialog, DateHeader, StatusBar, TodoListComponent};
use crate::ui::core::{Action, Component, EventType};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{Clock, SystemClock};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

/// Visibility of the add-entry dialog.
///
/// The form lives inside `Open`, so closing drops any unsubmitted draft.
#[derive(Debug, Clone, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(AddTodoDialog),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn dialog(&self) -> Option<&AddTodoDialog> {
        match self {
            Self::Open(dialog) => Some(dialog),
            Self::Closed => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut AddTodoDialog> {
        match self {
            Self::Open(dialog) => Some(dialog),
            Self::Closed => None,
        }
    }
}

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub todos: TodoList,
    pub dialog: DialogState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            todos: TodoList::seeded(),
            dialog: DialogState::Closed,
        }
    }
}

/// Owner of the to-do collection and the dialog state.
///
/// Every mutation goes through [`toggle_completion`], [`open_dialog`],
/// [`close_dialog`] or [`commit_new_entry`]; child components only return
/// [`Action`]s that `update` maps onto these.
///
/// [`toggle_completion`]: AppComponent::toggle_completion
/// [`open_dialog`]: AppComponent::open_dialog
/// [`close_dialog`]: AppComponent::close_dialog
/// [`commit_new_entry`]: AppComponent::commit_new_entry
pub struct AppComponent {
    // Component composition
    todo_list: TodoListComponent,

    // Application state
    state: AppState,

    // Services
    config: Config,
    icons: IconService,
    clock: Box<dyn Clock>,

    // Simple UI state
    add_button_area: Rect,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let todo_list = TodoListComponent::new(clock.today(), icons.clone(), config.display.show_deadlines);

        let mut app = Self {
            todo_list,
            state: AppState::default(),
            config,
            icons,
            clock,
            add_button_area: Rect::default(),
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn entries(&self) -> &[TodoEntry] {
        self.state.todos.entries()
    }

    /// The open dialog, if any
    pub fn dialog(&self) -> Option<&AddTodoDialog> {
        self.state.dialog.dialog()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.state.dialog.is_open()
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    /// Index of the highlighted row
    pub fn selected_index(&self) -> Option<usize> {
        self.todo_list.selected_index()
    }

    /// Area of the add control on the last render
    pub fn add_button_area(&self) -> Rect {
        self.add_button_area
    }

    /// Flip the completion flag of `id`; unknown ids are ignored
    pub fn toggle_completion(&mut self, id: TodoId) {
        match self.state.todos.toggle_completion(id) {
            Some(completed) => log::info!("Entry {} marked {}", id, if completed { "done" } else { "not done" }),
            None => log::debug!("Ignoring toggle for unknown entry {}", id),
        }
        self.sync_component_data();
    }

    /// Show the dialog with a fresh form; an already open dialog keeps its draft
    pub fn open_dialog(&mut self) {
        if self.state.dialog.is_open() {
            return;
        }
        let dialog = AddTodoDialog::new(
            self.clock.today(),
            self.config.ui.default_priority,
            self.config.display.deadline_format.clone(),
            self.icons.clone(),
        );
        self.state.dialog = DialogState::Open(dialog);
        log::debug!("Add dialog opened");
    }

    /// Hide the dialog, discarding any unsubmitted draft
    pub fn close_dialog(&mut self) {
        if self.state.dialog.is_open() {
            self.state.dialog = DialogState::Closed;
            log::debug!("Add dialog closed");
        }
    }

    /// Append a new entry built from `draft`, then close the dialog
    pub fn commit_new_entry(&mut self, draft: TodoDraft) -> TodoId {
        let id = self.state.todos.commit_new_entry(draft);
        log::info!("Added entry {}", id);
        self.close_dialog();
        self.sync_component_data();
        id
    }

    /// Update child components with current data
    fn sync_component_data(&mut self) {
        self.todo_list
            .update_data(self.state.todos.entries().to_vec(), self.clock.today(), self.icons.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('+') => Action::OpenDialog,
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Process one terminal event to completion and return the resulting action
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) if self.config.ui.mouse_enabled => self.handle_mouse_events(mouse),
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.update(action)
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        // Dialog has priority when visible
        if let Some(dialog) = self.state.dialog.dialog_mut() {
            return dialog.handle_key_events(key);
        }

        let list_action = self.todo_list.handle_key_events(key);
        if !matches!(list_action, Action::None) {
            list_action
        } else {
            self.handle_global_key(key)
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if let Some(dialog) = self.state.dialog.dialog_mut() {
            return dialog.handle_mouse_events(mouse);
        }

        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && LayoutManager::contains(self.add_button_area, mouse.column, mouse.row)
        {
            return Action::OpenDialog;
        }

        self.todo_list.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.todo_list.update(action);

        match action {
            Action::ToggleCompletion(id) => {
                self.toggle_completion(id);
                Action::None
            }
            Action::OpenDialog => {
                self.open_dialog();
                Action::None
            }
            Action::CloseDialog => {
                self.close_dialog();
                Action::None
            }
            Action::CommitNewEntry(draft) => {
                self.commit_new_entry(draft);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.sync_component_data();
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        // Relative deadlines follow the header across midnight
        let today = self.clock.today();
        self.todo_list.today = today;

        DateHeader::render(f, areas.header, today, &self.config.display);
        self.todo_list.render(f, areas.list);
        self.add_button_area = AddButton::render(f, areas.add_button, &self.icons);
        StatusBar::render(
            f,
            areas.status,
            self.state.dialog.is_open(),
            self.state.todos.completed_count(),
            self.state.todos.len(),
        );

        // Render dialog on top if visible
        if let Some(dialog) = self.state.dialog.dialog_mut() {
            dialog.render(f, rect);
        }
    }
}
