use crate::codec;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::JsonBody;
use crate::routes;
use axum::http::{header, StatusCode};

/// POST /api/public/v1/test handler - Echo the JSON request body
///
/// The body is decoded and re-encoded, so the response is structurally
/// equal to the request. Object key order is preserved. Bodies nested
/// deeper than `codec::MAX_DEPTH` are rejected with 400.
#[utoipa::path(
    post,
    path = routes::TEST,
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "The request body, echoed back", body = serde_json::Value),
        (status = 400, description = "Request body is not valid JSON or nests too deeply", body = ErrorResponse)
    ),
    tag = "test"
)]
pub async fn post_handler(
    JsonBody(data): JsonBody,
) -> Result<(StatusCode, [(header::HeaderName, &'static str); 1], Vec<u8>), ApiError> {
    let body = codec::encode(&data).map_err(ApiError::EncodeError)?;

    tracing::debug!("Echoing JSON body ({} bytes)", body.len());
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}
