use crate::constants::{CHECKBOX_WIDTH, EMPTY_LIST_MESSAGE, LIST_TITLE};
use crate::icons::IconService;
use crate::todo::TodoEntry;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::priority_color;
use crate::utils::datetime::format_relative_date;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// List of entries with a priority bar, label and checkbox per row.
///
/// Holds a snapshot of the owner's entries, refreshed through [`update_data`].
/// Key and mouse input only produce actions; completion is flipped by the owner.
///
/// [`update_data`]: TodoListComponent::update_data
pub struct TodoListComponent {
    pub entries: Vec<TodoEntry>,
    pub table_state: TableState,
    pub icons: IconService,
    pub today: NaiveDate,
    pub show_deadlines: bool,
    area: Rect,
}

impl TodoListComponent {
    pub fn new(today: NaiveDate, icons: IconService, show_deadlines: bool) -> Self {
        Self {
            entries: Vec::new(),
            table_state: TableState::default(),
            icons,
            today,
            show_deadlines,
            area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, entries: Vec<TodoEntry>, today: NaiveDate, icons: IconService) {
        self.entries = entries;
        self.today = today;
        self.icons = icons;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.entries.is_empty() {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0);
            self.table_state
                .select(Some(selected.min(self.entries.len().saturating_sub(1))));
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn selected_entry(&self) -> Option<&TodoEntry> {
        self.table_state.selected().and_then(|index| self.entries.get(index))
    }

    fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(index) if index + 1 < self.entries.len() => index + 1,
            Some(_) => 0,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(index) => index - 1,
        };
        self.table_state.select(Some(previous));
    }

    fn create_row(&self, entry: &TodoEntry) -> Row<'static> {
        let bar = Cell::from(Span::styled(
            self.icons.priority_bar(),
            Style::default().fg(priority_color(entry.priority().as_str())),
        ));

        let label_style = if entry.is_completed() {
            Style::default().fg(Color::Gray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        let mut label_spans = vec![Span::styled(entry.text().to_string(), label_style)];

        if self.show_deadlines {
            if let Some(deadline) = entry.deadline() {
                label_spans.push(Span::styled(
                    format!("  {} {}", self.icons.deadline(), format_relative_date(deadline, self.today)),
                    Style::default().fg(Color::Rgb(255, 165, 0)), // Orange color
                ));
            }
        }

        let checkbox_style = if entry.is_completed() {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let checkbox = Cell::from(Span::styled(self.icons.checkbox(entry.is_completed()), checkbox_style));

        Row::new(vec![bar, Cell::from(Line::from(label_spans)), checkbox])
    }

    /// Area inside the list borders where rows are drawn
    fn rows_area(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.area)
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevious,
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => self
                .selected_entry()
                .map_or(Action::None, |entry| Action::ToggleCompletion(entry.id())),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let rows_area = self.rows_area();
        if !LayoutManager::contains(rows_area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let local_index = (mouse.row - rows_area.y) as usize;
                let clicked_index = self.table_state.offset() + local_index;

                // Guard against clicks beyond the available data
                let Some(entry) = self.entries.get(clicked_index) else {
                    return Action::None;
                };

                let checkbox_start = rows_area.x + rows_area.width.saturating_sub(CHECKBOX_WIDTH);
                if mouse.column >= checkbox_start {
                    Action::ToggleCompletion(entry.id())
                } else {
                    Action::Select(clicked_index)
                }
            }
            MouseEventKind::ScrollUp => Action::SelectPrevious,
            MouseEventKind::ScrollDown => Action::SelectNext,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectNext => {
                self.select_next();
                Action::None
            }
            Action::SelectPrevious => {
                self.select_previous();
                Action::None
            }
            Action::Select(index) => {
                if index < self.entries.len() {
                    self.table_state.select(Some(index));
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let done = self.entries.iter().filter(|entry| entry.is_completed()).count();
        let title = format!(
            " {} {} ({}/{}) ",
            self.icons.list_title(),
            LIST_TITLE,
            done,
            self.entries.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Gray));

        if self.entries.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, rect);
            return;
        }

        let rows: Vec<Row> = self.entries.iter().map(|entry| self.create_row(entry)).collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(CHECKBOX_WIDTH),
            ],
        )
        .column_spacing(1)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::Rgb(40, 44, 60)).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
