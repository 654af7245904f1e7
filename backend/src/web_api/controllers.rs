pub mod health_controller;
pub mod task_controller;
