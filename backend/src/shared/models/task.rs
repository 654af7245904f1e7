use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::task_status::TaskStatus;

/// A persisted task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDateTime,
    pub status: TaskStatus,
}

/// Everything about a task except its id. Only produced by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub due_date: NaiveDateTime,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: i64, fields: TaskFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            status: fields.status,
        }
    }

    /// Full replace of the mutable columns. The id is retained.
    pub fn replace(self, fields: TaskFields) -> Self {
        Self::new(self.id, fields)
    }
}

/// `0001-01-01T00:00:00`, the value an unset date-time field decodes to.
pub fn is_sentinel_date(value: &NaiveDateTime) -> bool {
    value.year() == 1
        && value.ordinal() == 1
        && value.num_seconds_from_midnight() == 0
        && value.nanosecond() == 0
}

/// Reads an RFC 3339 timestamp (keeping its wall-clock part), a naive
/// ISO date-time, or a bare `YYYY-MM-DD` taken as midnight.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.naive_local())
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok())
        .or_else(|| raw.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn sentinel_is_only_the_first_instant() {
        assert!(is_sentinel_date(&at(1, 1, 1, 0)));
        assert!(!is_sentinel_date(&at(1, 1, 1, 1)));
        assert!(!is_sentinel_date(&at(2024, 1, 1, 0)));
    }

    #[test]
    fn parses_offset_naive_and_bare_dates() {
        assert_eq!(parse_date_time("2024-01-05T10:00:00Z"), Some(at(2024, 1, 5, 10)));
        assert_eq!(parse_date_time("2024-01-05T10:00:00-03:00"), Some(at(2024, 1, 5, 10)));
        assert_eq!(parse_date_time("2024-01-05T10:00:00"), Some(at(2024, 1, 5, 10)));
        assert_eq!(parse_date_time(" 2024-01-05 "), Some(at(2024, 1, 5, 0)));
        assert_eq!(parse_date_time("tomorrow"), None);
        assert_eq!(parse_date_time(""), None);
    }

    #[test]
    fn replace_keeps_id() {
        let task = Task::new(7, TaskFields {
            title: "Old".into(),
            description: None,
            due_date: at(2024, 1, 5, 9),
            status: TaskStatus::Pending,
        });

        let updated = task.replace(TaskFields {
            title: "New".into(),
            description: Some("details".into()),
            due_date: at(2024, 2, 1, 10),
            status: TaskStatus::Done,
        });

        assert_eq!(updated.id, 7);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.status, TaskStatus::Done);
    }
}
