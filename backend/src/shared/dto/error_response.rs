use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorMessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorListResponse {
    pub errors: Vec<String>,
}
