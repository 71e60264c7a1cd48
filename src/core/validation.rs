//! Pure decision logic over session fields. No I/O.

use crate::models::session::{SessionStatus, WorkSession};
use crate::utils::time::{format_time, parse_time};
use chrono::NaiveTime;

pub struct SessionValidation;

impl SessionValidation {
    /// `sem_registro` without a start, `completa` when start, end and worked
    /// time are all known, `incompleta` otherwise.
    pub fn determine_session_status(
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        worked_time: Option<f64>,
    ) -> SessionStatus {
        match (start_time, end_time, worked_time) {
            (None, _, _) => SessionStatus::NoRecord,
            (Some(_), Some(_), Some(_)) => SessionStatus::Complete,
            _ => SessionStatus::Incomplete,
        }
    }

    /// Both values must be non-empty, parse as times of day, and `end > start`.
    pub fn validate_session_times(start_time: &str, end_time: &str) -> bool {
        if start_time.trim().is_empty() || end_time.trim().is_empty() {
            return false;
        }

        match (parse_time(start_time), parse_time(end_time)) {
            (Some(start), Some(end)) => end > start,
            _ => false,
        }
    }

    pub fn is_session_complete(session: &WorkSession) -> bool {
        session.status == SessionStatus::Complete
            && session.start_time.is_some()
            && session.end_time.is_some()
            && session.worked_time_real.is_some()
    }

    pub fn is_session_incomplete(session: &WorkSession) -> bool {
        session.status == SessionStatus::Incomplete
            && session.start_time.is_some()
            && session.end_time.is_none()
    }

    pub fn validate_session_data(session: &WorkSession) -> bool {
        if session.user_id.trim().is_empty() {
            return false;
        }

        match (session.start_time, session.end_time) {
            (Some(start), Some(end)) => {
                Self::validate_session_times(&format_time(&start), &format_time(&end))
            }
            _ => true,
        }
    }
}
