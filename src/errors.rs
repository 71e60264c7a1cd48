//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid page request: {0}")]
    InvalidPage(String),

    // ---------------------------
    // Domain rules
    // ---------------------------
    #[error("End time {end} must be later than start time {start}")]
    ReversedTimes { start: String, end: String },

    #[error("Already clocked in on {0}")]
    AlreadyClockedIn(NaiveDate),

    #[error("Session for {0} is already complete")]
    AlreadyClockedOut(NaiveDate),

    #[error("Session for {0} is complete: an end time is required to revise it")]
    EndTimeRequired(NaiveDate),

    // ---------------------------
    // Persistence outcomes
    // ---------------------------
    #[error("No session found for user '{user_id}' on {date}")]
    NotFound { user_id: String, date: NaiveDate },

    #[error("Conflicting session data: {0}")]
    Conflict(String),

    #[error("Uniqueness constraint on (user_id, date) is not configured: {0}")]
    ConstraintMisconfigured(String),

    #[error("No user is signed in (use --user or set 'user' in the configuration)")]
    NotAuthenticated,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Stable error kind, used by the front end to pick a message.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io",
            AppError::Db(_) | AppError::Migration(_) => "database.error",
            AppError::Serde(_) => "serialization",
            AppError::InvalidDate(_) => "validation.invalidDate",
            AppError::InvalidTime(_) => "validation.invalidTime",
            AppError::InvalidMonth(_) => "validation.invalidMonth",
            AppError::InvalidPage(_) => "validation.invalidPage",
            AppError::ReversedTimes { .. } => "session.reversedTimes",
            AppError::AlreadyClockedIn(_) => "session.alreadyClockedIn",
            AppError::AlreadyClockedOut(_) => "session.alreadyClockedOut",
            AppError::EndTimeRequired(_) => "validation.endTimeRequired",
            AppError::NotFound { .. } => "session.notFound",
            AppError::Conflict(_) => "database.conflict",
            AppError::ConstraintMisconfigured(_) => "database.constraintError",
            AppError::NotAuthenticated => "auth.notAuthenticated",
            AppError::Config(_) => "config",
            AppError::Export(_) => "export",
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind().starts_with("validation.")
    }
}

pub type AppResult<T> = Result<T, AppError>;
