use crate::models::TestResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /api/public/v1/test handler - Return the fixed test payload
///
/// Query parameters, headers and any request body are ignored.
#[utoipa::path(
    get,
    path = routes::TEST,
    responses(
        (status = 200, description = "Fixed test payload", body = TestResponse)
    ),
    tag = "test"
)]
pub async fn get_handler() -> (StatusCode, Json<TestResponse>) {
    tracing::debug!("Serving fixed test payload");
    (StatusCode::OK, Json(TestResponse::fixed()))
}
