use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::TestResponse;
use crate::routes::RoutePrefix;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "json-echo-mock API",
        version = "1.0.0",
        description = "HTTP mock server returning a fixed JSON payload and echoing JSON bodies"
    ),
    paths(
        handlers::get::get_handler,
        handlers::post::post_handler
    ),
    components(
        schemas(
            TestResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "test", description = "Fixed payload and echo operations")
    )
)]
pub struct ApiDoc;

/// OpenAPI document with every path moved under `prefix`
pub fn openapi_for(prefix: &RoutePrefix) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| (prefix.join(&path), item))
        .collect();
    doc
}

pub fn log_operations(prefix: &RoutePrefix) {
    for (path, item) in openapi_for(prefix).paths.paths {
        tracing::debug!(
            path = %path,
            get = item.get.is_some(),
            post = item.post.is_some(),
            "Documented operation"
        );
    }
}
