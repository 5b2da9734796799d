use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps request failures to HTTP status codes and renders them as
/// `{"error": "..."}` JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON
    JsonError(serde_json::Error),
    /// Request body nests arrays/objects deeper than the given limit
    TooDeep(usize),
    /// Response body could not be serialized
    EncodeError(serde_json::Error),
    /// Request body could not be read, e.g. it exceeds the body limit
    BodyRead(BytesRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: {}", err),
            ),
            ApiError::TooDeep(limit) => (
                StatusCode::BAD_REQUEST,
                format!("JSON parse error: nesting depth exceeds limit of {}", limit),
            ),
            ApiError::EncodeError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("JSON encode error: {}", err),
            ),
            ApiError::BodyRead(rejection) => (
                rejection.status(),
                format!("Failed to read request body: {}", rejection.body_text()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRead(rejection)
    }
}
