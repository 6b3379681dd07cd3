// Date utility functions
// Week boundaries, time-of-day parsing and minute truncation

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn is_same_day(date1: NaiveDateTime, date2: NaiveDateTime) -> bool {
    date1.date() == date2.date()
}

/// Drop seconds and sub-second precision from an instant.
pub fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(instant)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Taken modulo 7.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - i64::from(first_day_of_week % 7)).rem_euclid(7);
    date - Duration::days(offset)
}

/// Parse an `H:mm` time of day such as `8:00` or `20:30`.
///
/// Returns `None` for anything else, including values with seconds.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    let (hours, minutes) = value.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    if !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Format a day column header, e.g. `Wednesday 04/12`.
pub fn format_day_header(date: NaiveDate) -> String {
    date.format("%A %d/%m").to_string()
}
