/// ANSI color helper utilities for terminal output.
use crate::models::session::SessionStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status color:
/// completa → green
/// incompleta → yellow
/// sem_registro → grey
pub fn color_for_status(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Complete => GREEN,
        SessionStatus::Incomplete => YELLOW,
        SessionStatus::NoRecord => GREY,
    }
}

/// Grey out placeholder values (`--:--`, `--`, empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "--" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: SessionStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}
