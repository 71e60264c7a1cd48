use crate::utils::time::TIME_FMT;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a day's session.
///
/// Serialized and stored with the backend's names
/// (`sem_registro`, `incompleta`, `completa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[serde(rename = "sem_registro")]
    NoRecord,
    #[serde(rename = "incompleta")]
    Incomplete,
    #[serde(rename = "completa")]
    Complete,
}

impl SessionStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionStatus::NoRecord => "sem_registro",
            SessionStatus::Incomplete => "incompleta",
            SessionStatus::Complete => "completa",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "sem_registro" => Some(SessionStatus::NoRecord),
            "incompleta" => Some(SessionStatus::Incomplete),
            "completa" => Some(SessionStatus::Complete),
            _ => None,
        }
    }

    /// Short English label for terminal and report output.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::NoRecord => "no record",
            SessionStatus::Incomplete => "incomplete",
            SessionStatus::Complete => "complete",
        }
    }
}

/// `HH:MM` (de)serialization for optional times of day.
pub(crate) mod hhmm {
    use super::TIME_FMT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&t.format(TIME_FMT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| {
            crate::utils::time::parse_time(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{s}'")))
        })
        .transpose()
    }
}

/// One calendar day's work-time record for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate, // ⇔ work_sessions.date (TEXT "YYYY-MM-DD")
    #[serde(with = "hhmm", default)]
    pub start_time: Option<NaiveTime>, // ⇔ work_sessions.start_time (TEXT "HH:MM")
    #[serde(with = "hhmm", default)]
    pub end_time: Option<NaiveTime>,
    pub worked_time_real: Option<f64>, // decimal hours
    pub status: SessionStatus,
    pub manual_edit: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl WorkSession {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Persistence-ready payload for creating (or upserting) a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionData {
    pub user_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm", default)]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "hhmm", default)]
    pub end_time: Option<NaiveTime>,
    pub worked_time_real: Option<f64>,
    pub status: SessionStatus,
    pub manual_edit: bool,
}

/// Partial update: every `Some` field is written, `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionPatch {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub worked_time_real: Option<f64>,
    pub status: Option<SessionStatus>,
    pub manual_edit: Option<bool>,
}

impl SessionPatch {
    pub fn is_empty(&self) -> bool {
        *self == SessionPatch::default()
    }
}

impl From<&CreateSessionData> for SessionPatch {
    fn from(data: &CreateSessionData) -> Self {
        Self {
            start_time: data.start_time,
            end_time: data.end_time,
            worked_time_real: data.worked_time_real,
            status: Some(data.status),
            manual_edit: Some(data.manual_edit),
        }
    }
}
