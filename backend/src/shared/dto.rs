// Requests
pub mod task_request;
pub mod task_queries;

// Responses
pub mod error_response;
pub mod health_response;
