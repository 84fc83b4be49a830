use chrono::{NaiveDate, Weekday};
use daylist::utils::datetime::{
    format_relative_date, format_with, next_weekday, shift_days, Clock, FixedClock, SystemClock,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_relative_dates_near_today() {
    let today = date(2025, 1, 15);
    assert_eq!(format_relative_date(today, today), "today");
    assert_eq!(format_relative_date(date(2025, 1, 16), today), "tomorrow");
    assert_eq!(format_relative_date(date(2025, 1, 14), today), "yesterday");
    assert_eq!(format_relative_date(date(2025, 1, 17), today), "next Friday");
    assert_eq!(format_relative_date(date(2025, 1, 22), today), "next Wednesday");
    assert_eq!(format_relative_date(date(2025, 1, 12), today), "last Sunday");
}

#[test]
fn test_relative_dates_further_out() {
    let today = date(2025, 1, 15);
    assert_eq!(format_relative_date(date(2025, 1, 27), today), "in 12 days");
    assert_eq!(format_relative_date(date(2025, 1, 5), today), "10 days ago");
    assert_eq!(format_relative_date(date(2025, 3, 1), today), "Mar 01");
    assert_eq!(format_relative_date(date(2026, 3, 1), today), "Mar 01, 2026");
}

#[test]
fn test_next_weekday() {
    let wednesday = date(2025, 1, 15);
    assert_eq!(next_weekday(wednesday, Weekday::Mon), date(2025, 1, 20));
    assert_eq!(next_weekday(wednesday, Weekday::Thu), date(2025, 1, 16));
    // Same weekday means a week later
    assert_eq!(next_weekday(wednesday, Weekday::Wed), date(2025, 1, 22));
}

#[test]
fn test_shift_days() {
    assert_eq!(shift_days(date(2024, 12, 31), 1), date(2025, 1, 1));
    assert_eq!(shift_days(date(2024, 3, 1), -1), date(2024, 2, 29));
    assert_eq!(shift_days(date(2025, 1, 15), 0), date(2025, 1, 15));
    // Out of range shifts leave the date unchanged
    assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
}

#[test]
fn test_header_formats() {
    let day = date(2025, 1, 5);
    assert_eq!(format_with(day, "%Y %B"), "2025 January");
    assert_eq!(format_with(day, "%-d %A"), "5 Sunday");
    assert_eq!(format_with(day, "%Y-%m-%d"), "2025-01-05");
}

#[test]
fn test_clocks() {
    let fixed = FixedClock(date(2025, 1, 15));
    assert_eq!(fixed.today(), date(2025, 1, 15));

    let now = chrono::Local::now().date_naive();
    let system = SystemClock.today();
    assert!((system - now).num_days().abs() <= 1);
}

#[test]
fn test_formats_a_date_cannot_satisfy() {
    use daylist::utils::datetime::try_format_with;

    let day = date(2025, 1, 15);
    assert_eq!(try_format_with(day, "%Y %B").as_deref(), Some("2025 January"));
    assert_eq!(try_format_with(day, "%Y %H"), None);
    assert_eq!(try_format_with(day, "%z"), None);

    // Falls back to the deadline format instead of panicking
    assert_eq!(format_with(day, "%Y %B %H:%M"), "2025-01-15");
}
