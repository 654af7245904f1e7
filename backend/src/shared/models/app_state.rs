use std::sync::Arc;

use crate::data_access::task_store::TaskStore;

pub struct AppState {
    pub tasks: Arc<dyn TaskStore>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(tasks: impl TaskStore + 'static) -> SharedState {
        Arc::new(AppState { tasks: Arc::new(tasks) })
    }
}
