use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;

use crate::{
    api_error::{ApiError, DATE_QUERY_INVALID, ID_NOT_POSITIVE, STATUS_QUERY_INVALID, TITLE_QUERY_EMPTY},
    app_state::SharedState,
    data_access::task_store::TaskFilter,
    task::{is_sentinel_date, parse_date_time, Task},
    task_queries::{DateQuery, StatusQuery, TitleQuery},
    task_request::TaskRequest,
    task_routes::ROUTER_PATH,
    task_status::TaskStatus,
    validation::validate_task,
};

pub struct TaskController {}

impl TaskController {
    pub async fn get_by_id(
        State(state): State<SharedState>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<Json<Task>, ApiError> {
        let id = positive_id(id)?;
        tracing::debug!(id, "fetching task");
        state.tasks.find_by_id(id)?
            .map(Json)
            .ok_or(ApiError::NotFound)
    }

    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<Task>>, ApiError> {
        let tasks = state.tasks.query(&TaskFilter::All)?;
        tracing::debug!(count = tasks.len(), "listing tasks");
        Ok(Json(tasks))
    }

    pub async fn get_by_title(
        State(state): State<SharedState>,
        query: Result<Query<TitleQuery>, QueryRejection>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        let Query(query) = query.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
        let title = match query.titulo {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ApiError::invalid_argument(TITLE_QUERY_EMPTY)),
        };
        tracing::debug!(%title, "searching tasks by title");
        Ok(Json(state.tasks.query(&TaskFilter::TitleContains(title))?))
    }

    pub async fn get_by_date(
        State(state): State<SharedState>,
        query: Result<Query<DateQuery>, QueryRejection>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        let Query(query) = query.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
        let date = query.data.as_deref()
            .and_then(parse_date_query)
            .ok_or_else(|| ApiError::invalid_argument(DATE_QUERY_INVALID))?;
        tracing::debug!(%date, "searching tasks by due date");
        Ok(Json(state.tasks.query(&TaskFilter::DueOn(date.date()))?))
    }

    pub async fn get_by_status(
        State(state): State<SharedState>,
        query: Result<Query<StatusQuery>, QueryRejection>,
    ) -> Result<Json<Vec<Task>>, ApiError> {
        let Query(query) = query.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
        let status = query.status.as_deref()
            .and_then(TaskStatus::parse)
            .ok_or_else(|| ApiError::invalid_argument(STATUS_QUERY_INVALID))?;
        tracing::debug!(%status, "searching tasks by status");
        Ok(Json(state.tasks.query(&TaskFilter::Status(status))?))
    }

    pub async fn create(
        State(state): State<SharedState>,
        body: Result<Json<TaskRequest>, JsonRejection>,
    ) -> Result<impl IntoResponse, ApiError> {
        let Json(request) = body.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
        let fields = validate_task(&request).map_err(rejected)?;

        let task = state.tasks.insert(fields)?;
        tracing::info!(id = task.id, title = %task.title, "task created");

        let location = format!("{}/{}", ROUTER_PATH, task.id);
        Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(task)))
    }

    pub async fn update(
        State(state): State<SharedState>,
        id: Result<Path<i64>, PathRejection>,
        body: Result<Json<TaskRequest>, JsonRejection>,
    ) -> Result<Json<Task>, ApiError> {
        let id = positive_id(id)?;
        let existing = state.tasks.find_by_id(id)?.ok_or(ApiError::NotFound)?;

        let Json(request) = body.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
        let fields = validate_task(&request).map_err(rejected)?;

        let task = existing.replace(fields);
        if !state.tasks.update(&task)? {
            // Removed between the lookup and the write.
            return Err(ApiError::NotFound);
        }
        tracing::info!(id, "task updated");
        Ok(Json(task))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        id: Result<Path<i64>, PathRejection>,
    ) -> Result<StatusCode, ApiError> {
        let id = positive_id(id)?;
        if state.tasks.find_by_id(id)?.is_none() || !state.tasks.delete(id)? {
            return Err(ApiError::NotFound);
        }
        tracing::info!(id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    }
}

fn positive_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::invalid_argument(e.body_text()))?;
    if id <= 0 {
        return Err(ApiError::invalid_argument(ID_NOT_POSITIVE));
    }
    Ok(id)
}

fn rejected(errors: Vec<String>) -> ApiError {
    tracing::warn!(?errors, "task payload rejected");
    ApiError::ValidationFailed(errors)
}

/// The sentinel date is not a date.
fn parse_date_query(raw: &str) -> Option<NaiveDateTime> {
    parse_date_time(raw).filter(|d| !is_sentinel_date(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    #[test]
    fn date_query_formats() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(0, 0, 0).unwrap();

        assert_eq!(parse_date_query("2024-01-05"), Some(midnight));
        assert_eq!(parse_date_query("2024-01-05T00:00:00"), Some(midnight));
        assert_eq!(parse_date_query(" 2024-01-05T00:00:00 "), Some(midnight));
        assert_eq!(parse_date_query("2024-01-05T00:00:00Z"), Some(midnight));
    }

    #[test]
    fn date_query_rejects_garbage_and_sentinel() {
        assert_eq!(parse_date_query("yesterday"), None);
        assert_eq!(parse_date_query(""), None);
        assert_eq!(parse_date_query("0001-01-01"), None);
        assert_eq!(parse_date_query("0001-01-01T00:00:00"), None);
        assert_eq!(parse_date_query("0001-01-01T00:00:00Z"), None);
    }
}
