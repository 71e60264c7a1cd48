use crate::models::session::WorkSession;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary metrics over a set of sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_hours: f64,
    pub complete_days: usize,
    pub incomplete_days: usize,
    pub total_days: usize,
    pub average_hours_per_day: f64,
}

/// First and last calendar day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Statistics plus the derived rates shown in a monthly report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: String,
    pub statistics: Statistics,
    pub completion_rate: f64,
    pub working_days: usize,
}

/// One page of history for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub items: Vec<WorkSession>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Everything needed to render a month's report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub range: MonthRange,
    pub sessions: Vec<WorkSession>,
    pub summary: MonthlySummary,
}
