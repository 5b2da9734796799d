use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{get_handler, post_handler};
use crate::routes::{self, RoutePrefix};

/// Build the router serving both test routes under `prefix`
///
/// Paths outside the prefix fall through to axum's default 404, other
/// methods on the test path to its default 405.
pub fn build_router(prefix: &RoutePrefix) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route(&prefix.join(routes::TEST), get(get_handler).post(post_handler))
        .layer(trace_layer)
}
