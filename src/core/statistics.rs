//! Aggregation of sessions into summary metrics.
//!
//! Missing numeric fields count as zero and an empty slice yields an
//! all-zero summary: an empty month is a normal state, not an error.

use crate::models::session::{SessionStatus, WorkSession};
use crate::models::stats::{MonthlySummary, Statistics};

pub struct SessionStatistics;

impl SessionStatistics {
    pub fn calculate_statistics(sessions: &[WorkSession]) -> Statistics {
        let total_hours: f64 = sessions
            .iter()
            .map(|s| s.worked_time_real.unwrap_or(0.0))
            .sum();

        let complete_days = Self::count_by_status(sessions, SessionStatus::Complete);
        let incomplete_days = Self::count_by_status(sessions, SessionStatus::Incomplete);
        let total_days = sessions.len();

        let average_hours_per_day = if total_days == 0 {
            0.0
        } else {
            total_hours / total_days as f64
        };

        Statistics {
            total_hours,
            complete_days,
            incomplete_days,
            total_days,
            average_hours_per_day,
        }
    }

    /// Percentage of complete sessions, 0 for an empty slice.
    pub fn completion_rate(sessions: &[WorkSession]) -> f64 {
        if sessions.is_empty() {
            return 0.0;
        }
        let complete = Self::count_by_status(sessions, SessionStatus::Complete);
        complete as f64 / sessions.len() as f64 * 100.0
    }

    /// Sessions with a recorded start time.
    pub fn working_days(sessions: &[WorkSession]) -> usize {
        sessions.iter().filter(|s| s.start_time.is_some()).count()
    }

    pub fn monthly_summary(month: &str, sessions: &[WorkSession]) -> MonthlySummary {
        MonthlySummary {
            month: month.to_string(),
            statistics: Self::calculate_statistics(sessions),
            completion_rate: Self::completion_rate(sessions),
            working_days: Self::working_days(sessions),
        }
    }

    fn count_by_status(sessions: &[WorkSession], status: SessionStatus) -> usize {
        sessions.iter().filter(|s| s.status == status).count()
    }
}
