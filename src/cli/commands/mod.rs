//! Command handlers. `open_service` is the composition root: it wires the
//! SQLite backend and the query cache into a `WorkSessionService`.

pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod today;

use crate::config::Config;
use crate::core::cache::{NoCache, QueryCache, TtlCache};
use crate::core::service::WorkSessionService;
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteBackend;
use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::{self, current_month_key};
use crate::utils::formatting::worked_or_dash;
use crate::utils::time::format_optional_time;
use chrono::NaiveDate;
use std::sync::Arc;

pub fn open_service(cfg: &Config) -> AppResult<WorkSessionService> {
    let pool = DbPool::new(&cfg.database)?;
    let backend = SqliteBackend::new(pool, cfg.user.clone());

    let cache: Arc<dyn QueryCache> = if cfg.cache_ttl_secs == 0 {
        Arc::new(NoCache)
    } else {
        Arc::new(TtlCache::new())
    };

    Ok(WorkSessionService::new(
        Box::new(backend),
        cache,
        cfg.cache_ttl(),
    ))
}

/// `--date` value or today.
pub(crate) fn resolve_date(date: Option<&str>) -> AppResult<NaiveDate> {
    match date {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string())),
        None => Ok(date::today()),
    }
}

pub(crate) fn resolve_month(month: Option<&str>) -> String {
    month.map(str::to_string).unwrap_or_else(current_month_key)
}

/// One-line description of a session for confirmations.
pub(crate) fn describe(s: &WorkSession) -> String {
    format!(
        "{}  in {}  out {}  worked {}  [{}]{}",
        s.date_str(),
        colorize_optional(&format_optional_time(s.start_time.as_ref())),
        colorize_optional(&format_optional_time(s.end_time.as_ref())),
        colorize_optional(&worked_or_dash(s.worked_time_real)),
        colorize_status(s.status),
        if s.manual_edit { " (manual)" } else { "" }
    )
}
