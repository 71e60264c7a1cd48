use crate::models::session::WorkSession;
use crate::models::stats::MonthlySummary;
use crate::utils::date::weekday_short;
use crate::utils::formatting::{hours2readable, percent, worked_or_dash};
use crate::utils::time::format_optional_time;
use serde::Serialize;

/// Flat row for CSV/PDF output of one session.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub date: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub worked_hours: Option<f64>,
    pub status: String,
    pub manual_edit: bool,
}

impl From<&WorkSession> for SessionExport {
    fn from(s: &WorkSession) -> Self {
        Self {
            date: s.date_str(),
            weekday: weekday_short(&s.date),
            start_time: format_optional_time(s.start_time.as_ref()),
            end_time: format_optional_time(s.end_time.as_ref()),
            worked_hours: s.worked_time_real,
            status: s.status.to_db_str().to_string(),
            manual_edit: s.manual_edit,
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Date", "Day", "In", "Out", "Worked", "Status", "Manual"]
}

pub(crate) fn session_to_row(e: &SessionExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.weekday.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        worked_or_dash(e.worked_hours),
        e.status.clone(),
        if e.manual_edit { "yes" } else { "" }.to_string(),
    ]
}

pub(crate) fn sessions_to_table(rows: &[SessionExport]) -> Vec<Vec<String>> {
    rows.iter().map(session_to_row).collect()
}

/// Summary lines printed above the PDF table.
pub(crate) fn summary_lines(summary: &MonthlySummary) -> Vec<String> {
    let st = &summary.statistics;
    vec![
        format!(
            "Total worked: {}   Average per day: {}",
            hours2readable(st.total_hours),
            hours2readable(st.average_hours_per_day)
        ),
        format!(
            "Days: {}   Complete: {}   Incomplete: {}   Working days: {}",
            st.total_days, st.complete_days, st.incomplete_days, summary.working_days
        ),
        format!("Completion rate: {}", percent(summary.completion_rate)),
    ]
}
