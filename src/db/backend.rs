//! Contract between the session core and the persistence/auth backend.

use crate::errors::AppResult;
use crate::models::session::{CreateSessionData, SessionPatch, WorkSession};
use chrono::NaiveDate;

/// Persistence and identity operations the core relies on.
///
/// Calls are single-shot: no queuing, retry or backoff. Failures surface
/// immediately as `AppError`.
pub trait SessionBackend {
    /// Id of the signed-in user, `AppError::NotAuthenticated` when nobody is.
    fn current_user_id(&self) -> AppResult<String>;

    fn find_session(&self, user_id: &str, date: NaiveDate) -> AppResult<Option<WorkSession>>;

    /// Insert or replace the session for `(user_id, date)`.
    ///
    /// Must return `AppError::ConstraintMisconfigured` when the uniqueness
    /// constraint itself is missing, and `AppError::Conflict` for ordinary
    /// constraint violations.
    fn upsert_session(&self, payload: &CreateSessionData) -> AppResult<WorkSession>;

    /// `AppError::NotFound` when there is no session for `(user_id, date)`.
    fn update_session(
        &self,
        user_id: &str,
        date: NaiveDate,
        patch: &SessionPatch,
    ) -> AppResult<WorkSession>;

    /// `AppError::NotFound` when there is no session for `(user_id, date)`.
    fn delete_session(&self, user_id: &str, date: NaiveDate) -> AppResult<()>;

    /// Sessions in `[start, end]`, oldest first.
    fn find_sessions_by_user_and_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<WorkSession>>;

    /// One page of sessions in `[start, end]`, newest first, plus the total
    /// number of sessions in the period.
    fn find_sessions_by_user_and_period_paged(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        offset: usize,
        limit: usize,
    ) -> AppResult<(Vec<WorkSession>, usize)>;
}
