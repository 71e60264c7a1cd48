//! SQLite implementation of [`SessionBackend`].

use crate::db::backend::SessionBackend;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::session::{CreateSessionData, SessionPatch, WorkSession};
use chrono::NaiveDate;

pub struct SqliteBackend {
    pool: DbPool,
    user: Option<String>,
}

impl SqliteBackend {
    /// `user` is the signed-in identity; `None` means nobody is signed in.
    pub fn new(pool: DbPool, user: Option<String>) -> Self {
        let user = user
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        Self { pool, user }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Audit logging never blocks the operation that triggered it.
    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            tracing::warn!(error = %e, operation, "failed to write audit log");
        }
    }
}

impl SessionBackend for SqliteBackend {
    fn current_user_id(&self) -> AppResult<String> {
        self.user.clone().ok_or(AppError::NotAuthenticated)
    }

    fn find_session(&self, user_id: &str, date: NaiveDate) -> AppResult<Option<WorkSession>> {
        queries::find_session(&self.pool.conn, user_id, date)
    }

    fn upsert_session(&self, payload: &CreateSessionData) -> AppResult<WorkSession> {
        let saved = queries::upsert_session(&self.pool.conn, payload)?;
        tracing::debug!(user = %saved.user_id, date = %saved.date, status = ?saved.status, "session upserted");
        self.audit(
            "upsert",
            &saved.date_str(),
            &format!(
                "user={} status={} manual={}",
                saved.user_id,
                saved.status.to_db_str(),
                saved.manual_edit
            ),
        );
        Ok(saved)
    }

    fn update_session(
        &self,
        user_id: &str,
        date: NaiveDate,
        patch: &SessionPatch,
    ) -> AppResult<WorkSession> {
        let updated = queries::update_session(&self.pool.conn, user_id, date, patch)?.ok_or_else(
            || AppError::NotFound {
                user_id: user_id.to_string(),
                date,
            },
        )?;
        tracing::debug!(user = user_id, %date, status = ?updated.status, "session updated");
        self.audit(
            "update",
            &updated.date_str(),
            &format!("user={} status={}", user_id, updated.status.to_db_str()),
        );
        Ok(updated)
    }

    fn delete_session(&self, user_id: &str, date: NaiveDate) -> AppResult<()> {
        if queries::delete_session(&self.pool.conn, user_id, date)? == 0 {
            return Err(AppError::NotFound {
                user_id: user_id.to_string(),
                date,
            });
        }
        tracing::debug!(user = user_id, %date, "session deleted");
        self.audit("delete", &date.to_string(), &format!("user={}", user_id));
        Ok(())
    }

    fn find_sessions_by_user_and_period(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<WorkSession>> {
        queries::load_period(&self.pool.conn, user_id, start, end)
    }

    fn find_sessions_by_user_and_period_paged(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        offset: usize,
        limit: usize,
    ) -> AppResult<(Vec<WorkSession>, usize)> {
        queries::load_period_page(&self.pool.conn, user_id, start, end, offset, limit)
    }
}
