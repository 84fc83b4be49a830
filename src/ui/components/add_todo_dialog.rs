//! Modal form for creating a new to-do entry.
//!
//! The dialog only exists while its owner holds it in `DialogState::Open`, so
//! every field is dropped together with it when the owner closes the dialog.
//! Submitting never mutates the owner directly; it returns
//! [`Action::CommitNewEntry`] and the owner commits and then closes.

use crate::constants::{
    DIALOG_TITLE_ADD_TODO, DIALOG_WIDTH_PERCENT, FIELD_DEADLINE, FIELD_HAS_DEADLINE, FIELD_PRIORITY,
    FIELD_TITLE, SUBMIT_LABEL, TITLE_PLACEHOLDER,
};
use crate::icons::IconService;
use crate::todo::{Priority, TodoDraft};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_selection_paragraph,
    shortcuts,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::priority_color;
use crate::utils::datetime::{format_relative_date, format_with, next_weekday, shift_days};
use chrono::{NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Focusable parts of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    HasDeadline,
    Deadline,
    Priority,
    Submit,
}

/// Add-entry dialog state and rendering
#[derive(Debug, Clone)]
pub struct AddTodoDialog {
    text: String,
    cursor_position: usize,
    has_deadline: bool,
    deadline_value: NaiveDate,
    priority: Priority,
    focus: FormField,
    today: NaiveDate,
    deadline_format: String,
    icons: IconService,
    // Filled in by `render` for mouse hit testing
    dialog_area: Rect,
    field_areas: Vec<(FormField, Rect)>,
}

impl AddTodoDialog {
    pub fn new(today: NaiveDate, default_priority: Priority, deadline_format: String, icons: IconService) -> Self {
        Self {
            text: String::new(),
            cursor_position: 0,
            has_deadline: true,
            deadline_value: today,
            priority: default_priority,
            focus: FormField::Title,
            today,
            deadline_format,
            icons,
            dialog_area: Rect::default(),
            field_areas: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_deadline(&self) -> bool {
        self.has_deadline
    }

    pub fn deadline_value(&self) -> NaiveDate {
        self.deadline_value
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Area covered by the dialog on the last render
    pub fn dialog_area(&self) -> Rect {
        self.dialog_area
    }

    /// Area of `field` on the last render, if it was drawn
    pub fn field_area(&self, field: FormField) -> Option<Rect> {
        self.field_areas
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, area)| *area)
    }

    /// Fields currently part of the form; the deadline input only exists while enabled
    pub fn visible_fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::Title, FormField::HasDeadline];
        if self.has_deadline {
            fields.push(FormField::Deadline);
        }
        fields.extend([FormField::Priority, FormField::Submit]);
        fields
    }

    /// Assemble the draft handed to the owner
    pub fn draft(&self) -> TodoDraft {
        TodoDraft::new(
            self.text.clone(),
            self.has_deadline.then_some(self.deadline_value),
            self.priority,
        )
    }

    fn submit(&self) -> Action {
        if self.text.is_empty() {
            // Accepted as-is; blank titles are not rejected
            log::debug!("Submitting new entry with empty title");
        }
        Action::CommitNewEntry(self.draft())
    }

    fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    fn focus_previous(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    fn toggle_has_deadline(&mut self) {
        self.has_deadline = !self.has_deadline;
    }

    /// Byte offset of the cursor inside `text`
    fn cursor_byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.text.len(), |(index, _)| index)
    }

    fn handle_title_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let index = self.cursor_byte_index();
                self.text.insert(index, c);
                self.cursor_position += 1;
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let index = self.cursor_byte_index();
                    self.text.remove(index);
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.text.chars().count() {
                    let index = self.cursor_byte_index();
                    self.text.remove(index);
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.text.chars().count());
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.text.chars().count(),
            _ => {}
        }
        Action::None
    }

    fn handle_deadline_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('-') => self.deadline_value = shift_days(self.deadline_value, -1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.deadline_value = shift_days(self.deadline_value, 1)
            }
            KeyCode::PageUp => self.deadline_value = shift_days(self.deadline_value, -7),
            KeyCode::PageDown => self.deadline_value = shift_days(self.deadline_value, 7),
            KeyCode::Char('t') => self.deadline_value = self.today,
            KeyCode::Char('w') => self.deadline_value = next_weekday(self.today, Weekday::Mon),
            _ => {}
        }
        Action::None
    }

    fn handle_priority_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => self.priority = self.priority.previous(),
            KeyCode::Right | KeyCode::Char(' ') => self.priority = self.priority.next(),
            KeyCode::Char('h') => self.priority = Priority::High,
            KeyCode::Char('m') => self.priority = Priority::Medium,
            KeyCode::Char('l') => self.priority = Priority::Low,
            _ => {}
        }
        Action::None
    }

    fn deadline_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("‹ {} ›", format_with(self.deadline_value, &self.deadline_format)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {} {}", self.icons.deadline(), format_relative_date(self.deadline_value, self.today)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn priority_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, priority) in Priority::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let color = priority_color(priority.as_str());
            let style = if *priority == self.priority {
                Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            spans.push(Span::styled(format!(" {} ", priority.display_name()), style));
        }
        Line::from(spans)
    }

    fn has_deadline_line(&self) -> Line<'static> {
        let style = if self.focus == FormField::HasDeadline {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(
            format!(" {} {}", self.icons.checkbox(self.has_deadline), FIELD_HAS_DEADLINE),
            style,
        ))
    }

    fn submit_line(&self) -> Line<'static> {
        let style = if self.focus == FormField::Submit {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        Line::from(Span::styled(format!("[ {} ]", SUBMIT_LABEL), style))
    }
}

impl Component for AddTodoDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseDialog,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                Action::None
            }
            _ => match self.focus {
                FormField::Title => self.handle_title_key(key),
                FormField::HasDeadline => {
                    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right) {
                        self.toggle_has_deadline();
                    }
                    Action::None
                }
                FormField::Deadline => self.handle_deadline_key(key),
                FormField::Priority => self.handle_priority_key(key),
                FormField::Submit => {
                    if key.code == KeyCode::Char(' ') {
                        self.submit()
                    } else {
                        Action::None
                    }
                }
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        // The background around the dialog dismisses it
        if !LayoutManager::contains(self.dialog_area, mouse.column, mouse.row) {
            return Action::CloseDialog;
        }

        let clicked = self
            .field_areas
            .iter()
            .find(|(_, area)| LayoutManager::contains(*area, mouse.column, mouse.row))
            .map(|(field, _)| *field);

        match clicked {
            Some(FormField::HasDeadline) => {
                self.focus = FormField::HasDeadline;
                self.toggle_has_deadline();
                Action::None
            }
            Some(FormField::Submit) => self.submit(),
            Some(field) => {
                self.focus = field;
                Action::None
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let fields = self.visible_fields();
        let mut constraints: Vec<Constraint> = fields
            .iter()
            .map(|field| match field {
                FormField::Title | FormField::Deadline | FormField::Priority => Constraint::Length(3),
                FormField::HasDeadline | FormField::Submit => Constraint::Length(1),
            })
            .collect();
        // Spacer above the submit button, instructions below it
        constraints.insert(constraints.len() - 1, Constraint::Length(1));
        constraints.push(Constraint::Length(1));

        let content_height: u16 = constraints
            .iter()
            .map(|c| match c {
                Constraint::Length(n) => *n,
                _ => 0,
            })
            .sum();
        // Borders plus one line of margin on each side
        let dialog_area = LayoutManager::centered_rect_lines(DIALOG_WIDTH_PERCENT, content_height + 4, rect);
        self.dialog_area = dialog_area;
        f.render_widget(Clear, dialog_area);

        let main_block = create_dialog_block(DIALOG_TITLE_ADD_TODO, Color::Cyan);
        let inner_area = main_block.inner(dialog_area);
        f.render_widget(main_block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner_area);

        // Chunk indices follow `fields`, with the spacer before the submit row
        let mut areas = Vec::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            let chunk = if *field == FormField::Submit {
                chunks[index + 1]
            } else {
                chunks[index]
            };
            areas.push((*field, chunk));
        }

        for (field, area) in &areas {
            let focused = self.focus == *field;
            match field {
                FormField::Title => {
                    let input = create_input_paragraph(
                        &self.text,
                        self.cursor_position,
                        TITLE_PLACEHOLDER,
                        FIELD_TITLE,
                        focused,
                    );
                    f.render_widget(input, *area);
                }
                FormField::HasDeadline => {
                    f.render_widget(Paragraph::new(self.has_deadline_line()), *area);
                }
                FormField::Deadline => {
                    let selection = create_selection_paragraph(self.deadline_line(), FIELD_DEADLINE, focused);
                    f.render_widget(selection, *area);
                }
                FormField::Priority => {
                    let selection = create_selection_paragraph(self.priority_line(), FIELD_PRIORITY, focused);
                    f.render_widget(selection, *area);
                }
                FormField::Submit => {
                    let button = Paragraph::new(self.submit_line()).alignment(Alignment::Center);
                    f.render_widget(button, *area);
                }
            }
        }

        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_ADD,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_CHANGE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[chunks.len() - 1]);

        self.field_areas = areas;
    }
}
