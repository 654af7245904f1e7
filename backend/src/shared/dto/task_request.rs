use serde::Deserialize;
use serde_json::Value;

use crate::task_status::RawStatus;

/// Task payload for create and update. Every field is optional here so
/// that validation, not deserialization, decides what is missing.
/// A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Kept raw so an unreadable date becomes a violation, not a rejected body.
    pub due_date: Option<Value>,
    pub status: Option<RawStatus>,
}
