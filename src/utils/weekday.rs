// Locale-independent weekday names used for availability matching

use chrono::{Datelike, NaiveDate, Weekday};

/// English weekday names in Monday-first order
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the English name of the weekday `date` falls on.
///
/// The date is treated as a plain calendar date, no time zone shift is applied.
pub fn english_name(date: NaiveDate) -> &'static str {
    weekday_name(date.weekday())
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Checks whether `name` is one of the seven English weekday names (exact case)
pub fn is_weekday_name(name: &str) -> bool {
    WEEKDAY_NAMES.contains(&name)
}
