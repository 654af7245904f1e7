use std::{collections::BTreeMap, sync::RwLock};

use super::task_store::{StoreError, TaskFilter, TaskStore};
use crate::task::{Task, TaskFields};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Task>,
    last_id: i64,
}

/// Task table held in process memory. Ids are never reused.
#[derive(Default)]
pub struct MemoryTaskStore {
    table: RwLock<Table>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryTaskStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    fn query(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.values().filter(|t| filter.matches(t)).cloned().collect())
    }

    fn insert(&self, fields: TaskFields) -> Result<Task, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        table.last_id += 1;
        let task = Task::new(table.last_id, fields);
        table.rows.insert(task.id, task.clone());
        Ok(task)
    }

    fn update(&self, task: &Task) -> Result<bool, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        match table.rows.get_mut(&task.id) {
            Some(row) => {
                *row = task.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_status::TaskStatus;
    use chrono::NaiveDate;

    fn fields(title: &str) -> TaskFields {
        TaskFields {
            title: title.to_string(),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 30, 0).unwrap(),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let store = MemoryTaskStore::new();
        let a = store.insert(fields("a")).unwrap();
        let b = store.insert(fields("b")).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete(b.id).unwrap());
        let c = store.insert(fields("c")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn update_of_missing_row_reports_false() {
        let store = MemoryTaskStore::new();
        let ghost = Task::new(42, fields("ghost"));

        assert!(!store.update(&ghost).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn query_returns_id_order() {
        let store = MemoryTaskStore::new();
        store.insert(fields("Write report")).unwrap();
        store.insert(fields("Read mail")).unwrap();
        store.insert(fields("Review report")).unwrap();

        let reports = store.query(&TaskFilter::TitleContains("REPORT".into())).unwrap();
        let ids: Vec<i64> = reports.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
