//! Field rules shared by create and update.
//!
//! Every rule runs; the caller gets the whole list of violations in rule
//! order, or the validated fields when there are none.

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::{
    task::{is_sentinel_date, parse_date_time, TaskFields},
    task_request::TaskRequest,
};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const TITLE_TOO_LONG: &str = "Title must be at most 100 characters.";
pub const DESCRIPTION_TOO_LONG: &str = "Description must be at most 500 characters.";
pub const DATE_EMPTY: &str = "Task date cannot be empty.";
pub const DATE_INVALID: &str = "Task date is invalid.";
pub const STATUS_INVALID: &str = "Task status is invalid.";

pub fn validate_task(request: &TaskRequest) -> Result<TaskFields, Vec<String>> {
    let mut errors = Vec::new();

    let title = request.title.as_deref();
    if title.map_or(true, |t| t.trim().is_empty()) {
        errors.push(TITLE_REQUIRED.to_string());
    }
    if title.is_some_and(|t| t.chars().count() > TITLE_MAX_CHARS) {
        errors.push(TITLE_TOO_LONG.to_string());
    }

    let description = request.description.as_deref();
    if description.is_some_and(|d| !d.trim().is_empty() && d.chars().count() > DESCRIPTION_MAX_CHARS) {
        errors.push(DESCRIPTION_TOO_LONG.to_string());
    }

    let due_date = match check_due_date(request.due_date.as_ref()) {
        Ok(due_date) => Some(due_date),
        Err(message) => {
            errors.push(message.to_string());
            None
        }
    };

    let status = request.status.as_ref().and_then(|s| s.resolve());
    if status.is_none() {
        errors.push(STATUS_INVALID.to_string());
    }

    match (title, due_date, status) {
        (Some(title), Some(due_date), Some(status)) if errors.is_empty() => Ok(TaskFields {
            title: title.to_string(),
            description: request.description.clone(),
            due_date,
            status,
        }),
        _ => Err(errors),
    }
}

fn check_due_date(raw: Option<&Value>) -> Result<NaiveDateTime, &'static str> {
    match raw {
        None | Some(Value::Null) => Err(DATE_EMPTY),
        Some(Value::String(text)) if text.trim().is_empty() => Err(DATE_EMPTY),
        Some(Value::String(text)) => match parse_date_time(text) {
            Some(date) if is_sentinel_date(&date) => Err(DATE_EMPTY),
            Some(date) => Ok(date),
            None => Err(DATE_INVALID),
        },
        Some(_) => Err(DATE_INVALID),
    }
}
