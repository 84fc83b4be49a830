use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use daylist::ui::core::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_convert_keeps_key_presses() {
    let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(EventHandler::convert(Event::Key(key)), EventType::Key(key));
}

#[test]
fn test_convert_drops_key_releases() {
    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(EventHandler::convert(Event::Key(release)), EventType::Other);
}

#[test]
fn test_convert_resize_and_focus() {
    assert_eq!(EventHandler::convert(Event::Resize(120, 40)), EventType::Resize(120, 40));
    assert_eq!(EventHandler::convert(Event::FocusGained), EventType::Other);
}

#[tokio::test]
async fn test_render_rate_cap() {
    let mut handler = EventHandler::with_tick_rate(Duration::from_millis(10));
    handler.mark_rendered();
    assert!(!handler.should_render());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(handler.should_render());
    assert!(handler.time_since_last_render() >= Duration::from_millis(16));
}
