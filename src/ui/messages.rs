//! Coloured, iconised terminal messages and user-facing error text.

use crate::errors::AppError;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Message shown to the user for a failed command.
///
/// Known kinds get a hint on what to do next; everything else falls back
/// to the error's own text.
pub fn user_message(err: &AppError) -> String {
    match err {
        AppError::ReversedTimes { start, end } => format!(
            "Clock-out ({end}) must be later than clock-in ({start}). \
             Sessions cannot cross midnight: split them into two days."
        ),
        AppError::AlreadyClockedIn(d) => {
            format!("You already clocked in on {d}. Use 'out' or 'add {d} --in ...' to fix it.")
        }
        AppError::AlreadyClockedOut(d) => {
            format!("The session for {d} is already closed. Use 'add' to revise it.")
        }
        AppError::EndTimeRequired(d) => format!(
            "The session for {d} is complete. Pass --out as well to revise it."
        ),
        AppError::NotFound { date, .. } => format!("No session recorded on {date}."),
        AppError::ConstraintMisconfigured(_) => {
            "The database is missing its one-session-per-day constraint. \
             Recreate it with 'rtimecard init' on a new file."
                .to_string()
        }
        AppError::Conflict(_) => "The session could not be saved: conflicting data.".to_string(),
        other => other.to_string(),
    }
}
