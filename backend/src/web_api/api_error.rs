use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    data_access::task_store::StoreError,
    error_response::{ErrorListResponse, ErrorMessageResponse},
};

pub const ID_NOT_POSITIVE: &str = "ID must be greater than zero.";
pub const TITLE_QUERY_EMPTY: &str = "Title cannot be empty.";
pub const DATE_QUERY_INVALID: &str = "The date provided is invalid.";
pub const STATUS_QUERY_INVALID: &str = "Invalid status";

/// Every way a task request can fail. Each one ends that request only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("validation failed: {}", .0.join(" "))]
    ValidationFailed(Vec<String>),
    #[error("task not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::InvalidArgument(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) | ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::InvalidArgument(message) => {
                (status, Json(ErrorMessageResponse { message })).into_response()
            }
            ApiError::ValidationFailed(errors) => {
                (status, Json(ErrorListResponse { errors })).into_response()
            }
            ApiError::NotFound => status.into_response(),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "task store failure");
                let message = format!("Error while accessing tasks: {e}");
                (status, Json(ErrorMessageResponse { message })).into_response()
            }
        }
    }
}
