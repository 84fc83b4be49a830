//! Date utility functions
//!
//! The current date comes from a [`Clock`] so the header and the deadline
//! picker can be driven by a fixed date in tests. Relative formatting follows
//! the usual to-do app wording ("today", "tomorrow", "next Friday").

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::fmt::Write;

/// Standard date format used for deadlines
pub const DEADLINE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shift a date by a number of days, keeping it within chrono's range
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Format `date` with a strftime pattern, or `None` when the pattern needs
/// fields a date does not have (time, zone) or is malformed
pub fn try_format_with(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Format `date` with a strftime pattern.
///
/// Falls back to [`DEADLINE_DATE_FORMAT`] for patterns a date cannot satisfy.
pub fn format_with(date: NaiveDate, pattern: &str) -> String {
    try_format_with(date, pattern).unwrap_or_else(|| {
        log::warn!("Date format '{}' cannot format a date, using {}", pattern, DEADLINE_DATE_FORMAT);
        date.format(DEADLINE_DATE_FORMAT).to_string()
    })
}

/// Calculate the next occurrence of a target weekday from a given date
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}

/// Format `date` relative to `today`
///
/// # Returns
/// * `String` - "today", "tomorrow", "next Monday", "in 12 days", "Jan 15", ...
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
