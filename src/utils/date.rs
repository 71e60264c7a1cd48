//! Date utilities: calendar days, month keys (YYYY-MM) and month ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Months, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

pub fn format_date(d: &NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Month key of a given day, e.g. `2024-02`.
pub fn month_key(d: &NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

pub fn current_month_key() -> String {
    month_key(&today())
}

/// Split a `YYYY-MM` key into (year, month).
///
/// Only the shape and the month-of-year are checked here; the 2020–2030
/// window belongs to `validation::is_valid_month`.
pub fn parse_month(month: &str) -> AppResult<(i32, u32)> {
    let m = month.trim();
    let bytes = m.as_bytes();

    let well_formed = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit);

    if !well_formed {
        return Err(AppError::InvalidMonth(month.to_string()));
    }

    let year: i32 = m[0..4]
        .parse()
        .map_err(|_| AppError::InvalidMonth(month.to_string()))?;
    let mon: u32 = m[5..7]
        .parse()
        .map_err(|_| AppError::InvalidMonth(month.to_string()))?;

    if !(1..=12).contains(&mon) {
        return Err(AppError::InvalidMonth(month.to_string()));
    }

    Ok((year, mon))
}

/// First and last calendar day of a `YYYY-MM` month.
///
/// The last day is the day before the first of the following month, so
/// leap-year February needs no special casing.
pub fn month_bounds(month: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (year, mon) = parse_month(month)?;

    let first = NaiveDate::from_ymd_opt(year, mon, 1)
        .ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;

    Ok((first, last))
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}

/// Human title for a month key: `2024-02` → `February 2024`.
pub fn month_title(month: &str) -> String {
    match parse_month(month) {
        Ok((y, m)) => format!("{} {}", month_name(&format!("{:02}", m)), y),
        Err(_) => month.to_string(),
    }
}

pub fn weekday_short(d: &NaiveDate) -> String {
    d.weekday().to_string()
}
