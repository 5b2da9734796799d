use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value as JsonValue;

use crate::codec;
use crate::error::ApiError;

/// Request body decoded as an arbitrary JSON value
///
/// Unlike `axum::Json`, the `Content-Type` header is not checked: any body
/// that parses as JSON is accepted.
#[derive(Debug)]
pub struct JsonBody(pub JsonValue);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = codec::decode(&bytes).inspect_err(|err| {
            tracing::debug!("Rejecting JSON body ({} bytes): {:?}", bytes.len(), err);
        })?;
        Ok(JsonBody(value))
    }
}
