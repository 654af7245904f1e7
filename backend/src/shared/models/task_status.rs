use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of states a task can be in.
///
/// Codes are stable: payloads may send either the name or the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TaskStatus {
    Pending = 0,
    InProgress = 1,
    Done = 2,
}

/// A status as it arrives on the wire, before membership is checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawStatus {
    Code(i64),
    Name(String),
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn name(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|status| *status as i64 == code)
    }

    /// Accepts a member name (any case) or its numeric code.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(code) = raw.parse::<i64>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(raw))
    }
}

impl RawStatus {
    pub fn resolve(&self) -> Option<TaskStatus> {
        match self {
            RawStatus::Code(code) => TaskStatus::from_code(*code),
            RawStatus::Name(name) => TaskStatus::parse(name),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_names_and_codes() {
        assert_eq!(TaskStatus::parse("Pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("inprogress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("2"), Some(TaskStatus::Done));
    }

    #[test]
    fn parse_rejects_non_members() {
        assert_eq!(TaskStatus::parse("Archived"), None);
        assert_eq!(TaskStatus::parse("7"), None);
        assert_eq!(TaskStatus::parse("-1"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn raw_status_from_json() {
        let code: RawStatus = serde_json::from_str("1").unwrap();
        let name: RawStatus = serde_json::from_str("\"Done\"").unwrap();
        let bogus: RawStatus = serde_json::from_str("42").unwrap();

        assert_eq!(code.resolve(), Some(TaskStatus::InProgress));
        assert_eq!(name.resolve(), Some(TaskStatus::Done));
        assert_eq!(bogus.resolve(), None);
    }

    #[test]
    fn serializes_as_member_name() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"InProgress\"");
    }
}
