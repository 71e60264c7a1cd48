//! Time utilities: parsing HH:MM, durations in minutes and decimal hours.

use crate::errors::{AppError, AppResult};
use crate::utils::validation::is_valid_time;
use chrono::{NaiveTime, Timelike};

pub const TIME_FMT: &str = "%H:%M";

/// Lenient parse for stored values: `HH:MM`, or `HH:MM:SS` as some
/// backends return it. User input goes through `parse_required_time`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, TIME_FMT)
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Strict `HH:MM` (24h) for user input.
pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    let trimmed = t.trim();
    if !is_valid_time(trimmed) {
        return Err(AppError::InvalidTime(t.to_string()));
    }
    NaiveTime::parse_from_str(trimmed, TIME_FMT).map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&str>) -> AppResult<Option<NaiveTime>> {
    input.map(parse_required_time).transpose()
}

/// Current local time truncated to the minute.
pub fn now_hhmm() -> NaiveTime {
    let now = chrono::Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// Decimal hours between two times of day, seconds included
/// (`09:00` → `16:15` = `7.25`).
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

/// Decimal hours → whole minutes, rounded to the nearest minute.
pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}

pub fn format_optional_time(t: Option<&NaiveTime>) -> String {
    t.map(format_time).unwrap_or_else(|| "--:--".to_string())
}
