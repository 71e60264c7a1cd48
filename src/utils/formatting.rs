//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::hours_to_minutes;

/// Signed minutes as `07h 15m`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Decimal hours rendered as `07h 15m`.
pub fn hours2readable(hours: f64) -> String {
    mins2readable(hours_to_minutes(hours))
}

/// Optional worked time for tables: `7.25` → `07h 15m`, `None` → `--`.
pub fn worked_or_dash(hours: Option<f64>) -> String {
    hours.map(hours2readable).unwrap_or_else(|| "--".to_string())
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
