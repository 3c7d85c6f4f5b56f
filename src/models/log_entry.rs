use super::duty_status::DutyStatus;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A stored duty-status interval.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub trip_id: i64,
    pub log_date: NaiveDate,           // ⇔ log_entries.log_date (TEXT "YYYY-MM-DD")
    pub status: DutyStatus,            // ⇔ log_entries.status
    pub start_time: NaiveDateTime,     // ⇔ log_entries.start_time (TEXT ISO 8601)
    pub end_time: Option<NaiveDateTime>, // NULL while the interval is still open
    pub mileage: f64,                  // miles driven within this interval
    pub remarks: String,
    pub automated: bool,               // automated vs manually keyed
    pub source: String,                // ⇔ log_entries.source (default 'cli')
    pub created_at: String,            // ISO 8601
}

impl LogEntry {
    /// High-level constructor for entries keyed in from the CLI.
    pub fn new(
        trip_id: i64,
        log_date: NaiveDate,
        status: DutyStatus,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        mileage: f64,
        remarks: String,
        automated: bool,
    ) -> Self {
        Self {
            id: 0,
            trip_id,
            log_date,
            status,
            start_time,
            end_time,
            mileage,
            remarks,
            automated,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.log_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        match &self.end_time {
            Some(t) => t.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => String::new(),
        }
    }

    /// Interval length in minutes; open entries count as zero until closed.
    pub fn duration_minutes(&self) -> i64 {
        match self.end_time {
            Some(end) => (end - self.start_time).num_minutes(),
            None => 0,
        }
    }

    /// Flatten into the record shape the sheet renderer consumes.
    pub fn to_record(&self) -> LogEntryRecord {
        LogEntryRecord {
            status: self.status,
            start_time: self.start_str(),
            end_time: self.end_str(),
            automated: self.automated,
        }
    }
}

/// Renderer input: status is a closed enum, but timestamps stay raw
/// strings so the interval normalizer owns their degradation policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntryRecord {
    pub status: DutyStatus,
    pub start_time: String,
    pub end_time: String,
    pub automated: bool,
}

impl LogEntryRecord {
    pub fn new(status: DutyStatus, start_time: &str, end_time: &str) -> Self {
        Self {
            status,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            automated: false,
        }
    }
}
