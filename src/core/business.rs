//! Derived fields and persistence-ready payloads for work sessions.

use crate::core::validation::SessionValidation;
use crate::errors::{AppError, AppResult};
use crate::models::session::CreateSessionData;
use crate::models::stats::MonthRange;
use crate::utils::date::month_bounds;
use crate::utils::time::{hours_between, parse_optional_time, parse_required_time};
use chrono::NaiveDate;

pub struct WorkSessionBusiness;

impl WorkSessionBusiness {
    /// Worked time in decimal hours (`09:00` → `17:15` = `7.25`).
    ///
    /// Sessions never cross midnight: `end <= start` is rejected with
    /// `ReversedTimes` instead of wrapping to the next day.
    pub fn calculate_worked_time(start_time: &str, end_time: &str) -> AppResult<f64> {
        let start = parse_required_time(start_time)?;
        let end = parse_required_time(end_time)?;

        if end <= start {
            return Err(AppError::ReversedTimes {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        Ok(hours_between(start, end))
    }

    pub fn format_create_data(
        user_id: &str,
        date: NaiveDate,
        start_time: Option<&str>,
        end_time: Option<&str>,
        manual_edit: bool,
    ) -> AppResult<CreateSessionData> {
        let start = parse_optional_time(start_time)?;
        let end = parse_optional_time(end_time)?;

        let worked_time_real = match (start_time, end_time) {
            (Some(s), Some(e)) => Some(Self::calculate_worked_time(s, e)?),
            _ => None,
        };

        let status = SessionValidation::determine_session_status(start, end, worked_time_real);

        Ok(CreateSessionData {
            user_id: user_id.to_string(),
            date,
            start_time: start,
            end_time: end,
            worked_time_real,
            status,
            manual_edit,
        })
    }

    pub fn create_clock_in_data(
        user_id: &str,
        date: NaiveDate,
        start_time: &str,
    ) -> AppResult<CreateSessionData> {
        Self::format_create_data(user_id, date, Some(start_time), None, false)
    }

    pub fn create_clock_out_data(
        user_id: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> AppResult<CreateSessionData> {
        Self::format_create_data(user_id, date, Some(start_time), Some(end_time), false)
    }

    pub fn create_manual_edit_data(
        user_id: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: Option<&str>,
    ) -> AppResult<CreateSessionData> {
        Self::format_create_data(user_id, date, Some(start_time), end_time, true)
    }

    pub fn get_month_date_range(month: &str) -> AppResult<MonthRange> {
        let (start_date, end_date) = month_bounds(month)?;
        Ok(MonthRange {
            start_date,
            end_date,
        })
    }
}
