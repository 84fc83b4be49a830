use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Text cursor drawn inside focused input fields
pub const CURSOR_CHAR: &str = "█";

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates a field block whose border is highlighted while focused
pub fn create_field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Yellow } else { Color::Gray };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field with a visual cursor at `cursor_position` (in chars).
///
/// An empty, unfocused field shows `placeholder` instead.
pub fn create_input_paragraph(
    input_buffer: &str,
    cursor_position: usize,
    placeholder: &str,
    field_title: &str,
    focused: bool,
) -> Paragraph<'static> {
    let input_style = Style::default().fg(Color::White);
    let placeholder_style = Style::default().fg(Color::DarkGray);

    let line = if input_buffer.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(CURSOR_CHAR, input_style));
        }
        spans.push(Span::styled(placeholder.to_string(), placeholder_style));
        Line::from(spans)
    } else if focused {
        let split = input_buffer
            .char_indices()
            .nth(cursor_position)
            .map_or(input_buffer.len(), |(index, _)| index);
        let (before, after) = input_buffer.split_at(split);
        Line::from(vec![
            Span::styled(before.to_string(), input_style),
            Span::styled(CURSOR_CHAR, input_style),
            Span::styled(after.to_string(), input_style),
        ])
    } else {
        Line::from(Span::styled(input_buffer.to_string(), input_style))
    };

    Paragraph::new(line).block(create_field_block(field_title, focused))
}

/// Creates a selection field block (read-only display with title)
pub fn create_selection_paragraph(value: Line<'static>, field_title: &str, focused: bool) -> Paragraph<'static> {
    Paragraph::new(value).block(create_field_block(field_title, focused))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next Field");
    pub const ARROWS_CHANGE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
}
