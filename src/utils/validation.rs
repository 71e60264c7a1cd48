//! Format checks for user input: emails, passwords, times, dates and month keys.
//!
//! All checks return `bool`; callers decide which error to raise.

use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_MONTH_YEAR: i32 = 2020;
pub const MAX_MONTH_YEAR: i32 = 2030;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

static MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])$").expect("valid month regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN && !password.trim().is_empty()
}

/// `HH:MM`, 24-hour clock.
pub fn is_valid_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// `YYYY-MM-DD` naming a real calendar day.
pub fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date) && super::date::parse_date(date).is_some()
}

/// `YYYY-MM` with a year inside the accepted reporting window.
pub fn is_valid_month(month: &str) -> bool {
    MONTH_RE
        .captures(month)
        .and_then(|c| c[1].parse::<i32>().ok())
        .is_some_and(|y| (MIN_MONTH_YEAR..=MAX_MONTH_YEAR).contains(&y))
}
