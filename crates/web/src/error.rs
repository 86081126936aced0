use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// The request body could not be read as a JSON object.
    InvalidPayload(JsonRejection),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload(rejection) => {
                write!(f, "Invalid payload: {}", rejection.body_text())
            }
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::InvalidPayload(rejection) => rejection.status(),
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::InvalidPayload(rejection) => {
                tracing::warn!(status = %status_code, "Rejected payload: {}", rejection.body_text());
                json!({
                    "error": rejection.body_text()
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidPayload(rejection)
    }
}

pub type WebResult<T> = Result<T, WebError>;
