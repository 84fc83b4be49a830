use chrono::NaiveDate;
use daylist::state::TodoList;
use daylist::todo::{ParsePriorityError, Priority, TodoDraft};

#[test]
fn test_seeded_list() {
    let list = TodoList::seeded();
    let ids: Vec<u32> = list.entries().iter().map(|entry| entry.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(list.entries().iter().all(|entry| !entry.is_completed()));
    assert!(list.entries().iter().all(|entry| entry.deadline().is_none()));

    let priorities: Vec<Priority> = list.entries().iter().map(|entry| entry.priority()).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
}

#[test]
fn test_toggle_parity() {
    let mut list = TodoList::seeded();
    let before = list.clone();

    for count in 1..=5 {
        assert_eq!(list.toggle_completion(2), Some(count % 2 == 1));
        assert_eq!(list.get(2).unwrap().is_completed(), count % 2 == 1);
    }

    // Other entries are untouched
    assert_eq!(list.get(1), before.get(1));
    assert_eq!(list.get(3), before.get(3));
    // Only the flag changed on the toggled entry
    let toggled = list.get(2).unwrap();
    let original = before.get(2).unwrap();
    assert_eq!(toggled.text(), original.text());
    assert_eq!(toggled.priority(), original.priority());
    assert_eq!(toggled.deadline(), original.deadline());
}

#[test]
fn test_toggle_unknown_id_is_ignored() {
    let mut list = TodoList::seeded();
    let before = list.clone();

    assert_eq!(list.toggle_completion(42), None);
    assert_eq!(list.toggle_completion(0), None);
    assert_eq!(list, before);
}

#[test]
fn test_commit_assigns_increasing_ids() {
    let mut list = TodoList::new();
    assert!(list.is_empty());

    let ids: Vec<u32> = (0..5)
        .map(|n| list.commit_new_entry(TodoDraft::new(format!("entry {n}"), None, Priority::Medium)))
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(list.len(), 5);
    // Insertion order is display order
    assert_eq!(list.entries()[4].text(), "entry 4");
}

#[test]
fn test_commit_keeps_draft_fields() {
    let mut list = TodoList::seeded();
    let deadline = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let id = list.commit_new_entry(TodoDraft::new("Pay rent", Some(deadline), Priority::High));
    let entry = list.get(id).unwrap();

    assert_eq!(entry.text(), "Pay rent");
    assert_eq!(entry.deadline(), Some(deadline));
    assert_eq!(entry.priority(), Priority::High);
    assert!(!entry.is_completed());
}

#[test]
fn test_empty_text_is_accepted() {
    let mut list = TodoList::new();
    let id = list.commit_new_entry(TodoDraft::new("", None, Priority::Low));
    assert_eq!(list.get(id).unwrap().text(), "");
}

#[test]
fn test_toggle_then_commit_scenario() {
    let mut list = TodoList::seeded();

    list.toggle_completion(2);
    assert!(list.get(2).unwrap().is_completed());
    assert!(!list.get(1).unwrap().is_completed());
    assert!(!list.get(3).unwrap().is_completed());

    list.commit_new_entry(TodoDraft::new("Buy milk", None, Priority::Low));

    assert_eq!(list.len(), 4);
    let added = &list.entries()[3];
    assert_eq!(added.id(), 4);
    assert_eq!(added.text(), "Buy milk");
    assert_eq!(added.priority(), Priority::Low);
    assert_eq!(added.deadline(), None);
    assert!(!added.is_completed());
    assert_eq!(list.completed_count(), 1);
}

#[test]
fn test_priority_parsing() {
    assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
    assert_eq!(" Medium ".parse::<Priority>(), Ok(Priority::Medium));
    assert_eq!("LOW".parse::<Priority>(), Ok(Priority::Low));
    assert_eq!(
        "urgent".parse::<Priority>(),
        Err(ParsePriorityError("urgent".to_string()))
    );
    assert_eq!(Priority::default(), Priority::Medium);
    assert_eq!(Priority::High.to_string(), "high");
}

#[test]
fn test_priority_cycling() {
    assert_eq!(Priority::High.next(), Priority::Medium);
    assert_eq!(Priority::Low.next(), Priority::High);
    assert_eq!(Priority::High.previous(), Priority::Low);
    assert_eq!(Priority::Medium.previous(), Priority::High);
}
