use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use daylist::icons::{IconService, IconTheme};
use daylist::todo::Priority;
use daylist::ui::components::{AddTodoDialog, FormField};
use daylist::ui::core::{Action, Component};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn new_dialog() -> AddTodoDialog {
    AddTodoDialog::new(
        today(),
        Priority::Medium,
        "%Y-%m-%d".to_string(),
        IconService::new(IconTheme::Ascii),
    )
}

fn press(dialog: &mut AddTodoDialog, code: KeyCode) -> Action {
    dialog.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(dialog: &mut AddTodoDialog, text: &str) {
    for c in text.chars() {
        press(dialog, KeyCode::Char(c));
    }
}

#[test]
fn test_fresh_form_defaults() {
    let dialog = new_dialog();
    assert_eq!(dialog.text(), "");
    assert!(dialog.has_deadline());
    assert_eq!(dialog.deadline_value(), today());
    assert_eq!(dialog.priority(), Priority::Medium);
    assert_eq!(dialog.focus(), FormField::Title);

    let draft = dialog.draft();
    assert_eq!(draft.text, "");
    assert_eq!(draft.deadline, Some(today()));
    assert_eq!(draft.priority, Priority::Medium);
}

#[test]
fn test_focus_cycle_skips_disabled_deadline() {
    let mut dialog = new_dialog();
    assert_eq!(
        dialog.visible_fields(),
        vec![
            FormField::Title,
            FormField::HasDeadline,
            FormField::Deadline,
            FormField::Priority,
            FormField::Submit
        ]
    );

    press(&mut dialog, KeyCode::Tab);
    press(&mut dialog, KeyCode::Char(' '));
    assert!(!dialog.has_deadline());
    assert!(!dialog.visible_fields().contains(&FormField::Deadline));

    press(&mut dialog, KeyCode::Tab);
    assert_eq!(dialog.focus(), FormField::Priority);
    press(&mut dialog, KeyCode::Tab);
    assert_eq!(dialog.focus(), FormField::Submit);
    press(&mut dialog, KeyCode::Tab);
    assert_eq!(dialog.focus(), FormField::Title);
    press(&mut dialog, KeyCode::BackTab);
    assert_eq!(dialog.focus(), FormField::Submit);
}

#[test]
fn test_disabled_deadline_drops_chosen_date() {
    let mut dialog = new_dialog();
    press(&mut dialog, KeyCode::Tab);
    press(&mut dialog, KeyCode::Tab);
    assert_eq!(dialog.focus(), FormField::Deadline);
    press(&mut dialog, KeyCode::PageDown);
    assert_eq!(dialog.deadline_value(), NaiveDate::from_ymd_opt(2025, 1, 22).unwrap());

    press(&mut dialog, KeyCode::Up);
    press(&mut dialog, KeyCode::Char(' '));
    assert_eq!(dialog.draft().deadline, None);

    // Re-enabling brings back the chosen date
    press(&mut dialog, KeyCode::Char(' '));
    assert_eq!(dialog.draft().deadline, NaiveDate::from_ymd_opt(2025, 1, 22));
}

#[test]
fn test_deadline_keys() {
    let mut dialog = new_dialog();
    press(&mut dialog, KeyCode::Down);
    press(&mut dialog, KeyCode::Down);

    press(&mut dialog, KeyCode::Left);
    assert_eq!(dialog.deadline_value(), NaiveDate::from_ymd_opt(2025, 1, 14).unwrap());
    press(&mut dialog, KeyCode::Char('+'));
    press(&mut dialog, KeyCode::Char('+'));
    assert_eq!(dialog.deadline_value(), NaiveDate::from_ymd_opt(2025, 1, 16).unwrap());
    press(&mut dialog, KeyCode::PageUp);
    assert_eq!(dialog.deadline_value(), NaiveDate::from_ymd_opt(2025, 1, 9).unwrap());
    press(&mut dialog, KeyCode::Char('t'));
    assert_eq!(dialog.deadline_value(), today());
    // 2025-01-15 is a Wednesday
    press(&mut dialog, KeyCode::Char('w'));
    assert_eq!(dialog.deadline_value(), NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
}

#[test]
fn test_priority_keys() {
    let mut dialog = new_dialog();
    for _ in 0..3 {
        press(&mut dialog, KeyCode::Tab);
    }
    assert_eq!(dialog.focus(), FormField::Priority);

    press(&mut dialog, KeyCode::Right);
    assert_eq!(dialog.priority(), Priority::Low);
    press(&mut dialog, KeyCode::Right);
    assert_eq!(dialog.priority(), Priority::High);
    press(&mut dialog, KeyCode::Left);
    assert_eq!(dialog.priority(), Priority::Low);
    press(&mut dialog, KeyCode::Char('h'));
    assert_eq!(dialog.priority(), Priority::High);
    press(&mut dialog, KeyCode::Char('m'));
    assert_eq!(dialog.priority(), Priority::Medium);
}

#[test]
fn test_title_editing_with_multibyte_text() {
    let mut dialog = new_dialog();
    type_text(&mut dialog, "café");
    assert_eq!(dialog.text(), "café");

    press(&mut dialog, KeyCode::Left);
    press(&mut dialog, KeyCode::Backspace);
    assert_eq!(dialog.text(), "caé");

    press(&mut dialog, KeyCode::Home);
    type_text(&mut dialog, "é");
    assert_eq!(dialog.text(), "écaé");

    press(&mut dialog, KeyCode::End);
    press(&mut dialog, KeyCode::Delete);
    assert_eq!(dialog.text(), "écaé");
    press(&mut dialog, KeyCode::Backspace);
    assert_eq!(dialog.text(), "éca");
}

#[test]
fn test_control_chars_are_not_typed() {
    let mut dialog = new_dialog();
    dialog.handle_key_events(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(dialog.text(), "");
}

#[test]
fn test_submit_and_cancel_actions() {
    let mut dialog = new_dialog();
    type_text(&mut dialog, "Buy milk");

    match press(&mut dialog, KeyCode::Enter) {
        Action::CommitNewEntry(draft) => {
            assert_eq!(draft.text, "Buy milk");
            assert_eq!(draft.deadline, Some(today()));
            assert_eq!(draft.priority, Priority::Medium);
        }
        other => panic!("expected CommitNewEntry, got {:?}", other),
    }

    assert_eq!(press(&mut dialog, KeyCode::Esc), Action::CloseDialog);
}

#[test]
fn test_empty_title_is_submitted() {
    let mut dialog = new_dialog();
    let action = press(&mut dialog, KeyCode::Enter);
    assert!(matches!(action, Action::CommitNewEntry(draft) if draft.text.is_empty()));
}

#[test]
fn test_space_on_submit_button_submits() {
    let mut dialog = new_dialog();
    press(&mut dialog, KeyCode::BackTab);
    assert_eq!(dialog.focus(), FormField::Submit);
    assert!(matches!(press(&mut dialog, KeyCode::Char(' ')), Action::CommitNewEntry(_)));
}
