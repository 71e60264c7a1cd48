//! Work session orchestration: identity, business rules, persistence and
//! read caching wired together.

use crate::core::business::WorkSessionBusiness;
use crate::core::cache::{QueryCache, get_or_fetch};
use crate::core::history::HistoryQuery;
use crate::core::statistics::SessionStatistics;
use crate::db::backend::SessionBackend;
use crate::errors::{AppError, AppResult};
use crate::models::session::{SessionPatch, SessionStatus, WorkSession};
use crate::models::stats::{HistoryPage, MonthlyReport};
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

pub struct WorkSessionService {
    backend: Box<dyn SessionBackend>,
    cache: Arc<dyn QueryCache>,
    ttl: Duration,
}

impl WorkSessionService {
    pub fn new(backend: Box<dyn SessionBackend>, cache: Arc<dyn QueryCache>, ttl: Duration) -> Self {
        Self {
            backend,
            cache,
            ttl,
        }
    }

    pub fn current_user_id(&self) -> AppResult<String> {
        self.backend.current_user_id()
    }

    fn cache_prefix(user_id: &str) -> String {
        format!("sessions:{user_id}:")
    }

    fn invalidate_user(&self, user_id: &str) {
        self.cache.invalidate_by_prefix(&Self::cache_prefix(user_id));
    }

    /// Today's (or any day's) session for the signed-in user.
    pub fn session_for(&self, date: NaiveDate) -> AppResult<Option<WorkSession>> {
        let user = self.current_user_id()?;
        let key = format!("{}day:{}", Self::cache_prefix(&user), format_date(&date));
        get_or_fetch(self.cache.as_ref(), &key, self.ttl, || {
            self.backend.find_session(&user, date)
        })
    }

    /// Start the day's session. Fails if the day already has a start time.
    pub fn clock_in(&self, date: NaiveDate, time: &str) -> AppResult<WorkSession> {
        let user = self.current_user_id()?;

        if let Some(existing) = self.backend.find_session(&user, date)?
            && existing.start_time.is_some()
        {
            return Err(AppError::AlreadyClockedIn(date));
        }

        let data = WorkSessionBusiness::create_clock_in_data(&user, date, time)?;
        let saved = self.backend.upsert_session(&data)?;
        self.invalidate_user(&user);

        tracing::info!(user = %user, %date, time, "clocked in");
        Ok(saved)
    }

    /// Close the day's session, computing worked time.
    ///
    /// The `manual_edit` flag of the existing session is left as it is.
    pub fn clock_out(&self, date: NaiveDate, time: &str) -> AppResult<WorkSession> {
        let user = self.current_user_id()?;

        let existing = self
            .backend
            .find_session(&user, date)?
            .filter(|s| s.start_time.is_some())
            .ok_or_else(|| AppError::NotFound {
                user_id: user.clone(),
                date,
            })?;

        if existing.end_time.is_some() {
            return Err(AppError::AlreadyClockedOut(date));
        }

        let start = existing
            .start_time
            .map(|t| format_time(&t))
            .unwrap_or_default();

        let data = WorkSessionBusiness::create_clock_out_data(&user, date, &start, time)?;
        let patch = SessionPatch {
            manual_edit: None,
            ..SessionPatch::from(&data)
        };

        let saved = self.backend.update_session(&user, date, &patch)?;
        self.invalidate_user(&user);

        tracing::info!(user = %user, %date, time, worked = ?saved.worked_time_real, "clocked out");
        Ok(saved)
    }

    /// Register or revise a day by hand. Replaces both times.
    ///
    /// A complete day stays complete: revising it without an end time fails
    /// with `EndTimeRequired`.
    pub fn register_manual(
        &self,
        date: NaiveDate,
        start_time: &str,
        end_time: Option<&str>,
    ) -> AppResult<WorkSession> {
        let user = self.current_user_id()?;

        if end_time.is_none()
            && let Some(existing) = self.backend.find_session(&user, date)?
            && existing.status == SessionStatus::Complete
        {
            return Err(AppError::EndTimeRequired(date));
        }

        let data = WorkSessionBusiness::create_manual_edit_data(&user, date, start_time, end_time)?;
        let saved = self.backend.upsert_session(&data)?;
        self.invalidate_user(&user);

        tracing::info!(user = %user, %date, status = ?saved.status, "manual entry saved");
        Ok(saved)
    }

    pub fn delete(&self, date: NaiveDate) -> AppResult<()> {
        let user = self.current_user_id()?;
        self.backend.delete_session(&user, date)?;
        self.invalidate_user(&user);

        tracing::info!(user = %user, %date, "session deleted");
        Ok(())
    }

    /// All sessions of a `YYYY-MM` month, oldest first.
    pub fn month_sessions(&self, month: &str) -> AppResult<Vec<WorkSession>> {
        let user = self.current_user_id()?;
        let range = WorkSessionBusiness::get_month_date_range(month)?;
        let key = format!("{}month:{}", Self::cache_prefix(&user), month);

        get_or_fetch(self.cache.as_ref(), &key, self.ttl, || {
            self.backend
                .find_sessions_by_user_and_period(&user, range.start_date, range.end_date)
        })
    }

    /// One page of a month's history, newest first.
    pub fn month_page(&self, query: HistoryQuery) -> AppResult<HistoryPage> {
        let user = self.current_user_id()?;
        let range = WorkSessionBusiness::get_month_date_range(&query.month)?;
        let key = format!(
            "{}page:{}:{}:{}",
            Self::cache_prefix(&user),
            query.month,
            query.page,
            query.per_page
        );

        let (items, total): (Vec<WorkSession>, usize) =
            get_or_fetch(self.cache.as_ref(), &key, self.ttl, || {
                self.backend.find_sessions_by_user_and_period_paged(
                    &user,
                    range.start_date,
                    range.end_date,
                    query.offset(),
                    query.per_page,
                )
            })?;

        Ok(query.into_page(items, total))
    }

    pub fn month_report(&self, month: &str) -> AppResult<MonthlyReport> {
        let range = WorkSessionBusiness::get_month_date_range(month)?;
        let sessions = self.month_sessions(month)?;
        let summary = SessionStatistics::monthly_summary(month, &sessions);

        Ok(MonthlyReport {
            range,
            sessions,
            summary,
        })
    }
}
