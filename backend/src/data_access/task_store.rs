use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    task::{Task, TaskFields},
    task_status::TaskStatus,
};

/// Persistence seam for task rows.
///
/// Handlers only see this trait. `DataContext` backs it with redb,
/// `MemoryTaskStore` with a map.
pub trait TaskStore: Send + Sync {
    fn find_by_id(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Rows matching `filter`, in ascending id order.
    fn query(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError>;

    /// Assigns the next id and persists the row.
    fn insert(&self, fields: TaskFields) -> Result<Task, StoreError>;

    /// Replaces an existing row. `Ok(false)` if the id is gone.
    fn update(&self, task: &Task) -> Result<bool, StoreError>;

    /// `Ok(false)` if there was nothing to remove.
    fn delete(&self, id: i64) -> Result<bool, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    All,
    /// Case-insensitive substring of the title.
    TitleContains(String),
    /// Calendar date of `due_date`; time of day is ignored.
    DueOn(NaiveDate),
    Status(TaskStatus),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::TitleContains(needle) => {
                task.title.to_lowercase().contains(&needle.to_lowercase())
            }
            TaskFilter::DueOn(day) => task.due_date.date() == *day,
            TaskFilter::Status(status) => task.status == *status,
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redb: {0}")]
    Redb(String),
    #[error("decode: {0}")]
    Decode(String),
    #[error("encode: {0}")]
    Encode(String),
    #[error("task store lock poisoned")]
    Poisoned,
}

// redb 2.x has many error types. Blanket them all into StoreError::Redb.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for StoreError {
            fn from(e: $t) -> Self { StoreError::Redb(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);
