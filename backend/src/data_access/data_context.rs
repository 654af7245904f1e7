//! Task table on disk.
//!
//! One redb file: `tasks` maps id → postcard-encoded row, `meta` holds
//! the id counter. Every mutation is a single write transaction.

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::sync::Arc;

use super::task_store::{StoreError, TaskFilter, TaskStore};
use crate::task::{Task, TaskFields};

const TASKS_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("tasks");
const META_TABLE: TableDefinition<&str, i64> = TableDefinition::new("meta");
const NEXT_ID_KEY: &str = "next_id";

/// Thin handle to the redb file. Cloneable (Arc inside).
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>,
}

impl DataContext {
    /// Open (or create) the database at `path`, creating tables if needed.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(TASKS_TABLE)?;
            let _ = write_txn.open_table(META_TABLE)?;
        }
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }
}

fn encode(task: &Task) -> Result<Vec<u8>, StoreError> {
    postcard::to_allocvec(task).map_err(|e| StoreError::Encode(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<Task, StoreError> {
    postcard::from_bytes(bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

impl TaskStore for DataContext {
    fn find_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;
        match tasks_table.get(id)? {
            Some(data) => Ok(Some(decode(data.value())?)),
            None => Ok(None),
        }
    }

    fn query(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;

        let mut tasks = Vec::new();
        for entry in tasks_table.iter()? {
            let (_, value) = entry?;
            let task = decode(value.value())?;
            if filter.matches(&task) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    fn insert(&self, fields: TaskFields) -> Result<Task, StoreError> {
        let write_txn = self.db.begin_write()?;
        let task;
        {
            let mut meta_table = write_txn.open_table(META_TABLE)?;
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;

            let id = meta_table.get(NEXT_ID_KEY)?.map(|v| v.value()).unwrap_or(1);
            meta_table.insert(NEXT_ID_KEY, id + 1)?;

            task = Task::new(id, fields);
            let task_bytes = encode(&task)?;
            tasks_table.insert(task.id, task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(task)
    }

    fn update(&self, task: &Task) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            if tasks_table.get(task.id)?.is_none() {
                return Ok(false);
            }
            let task_bytes = encode(task)?;
            tasks_table.insert(task.id, task_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(true)
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut tasks_table = write_txn.open_table(TASKS_TABLE)?;
            deleted = tasks_table.remove(id)?.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let read_txn = self.db.begin_read()?;
        let tasks_table = read_txn.open_table(TASKS_TABLE)?;
        Ok(tasks_table.len()? as usize)
    }
}

// ── Tests ──────────────────────────────────────────────────────
