//! Request extractors that reject with [`AppError`] JSON bodies.
//!
//! - [`JsonBody`] rejects with 400 when the body is missing, is JSON `null`,
//!   or is an empty object/array. Used by create endpoints.
//! - [`PartialJsonBody`] rejects only a missing or `null` body; an empty
//!   object is a no-op partial update. Used by update endpoints.
//! - [`PathParam`] maps an unparseable path segment to 404.
//!
//! Content type is not enforced.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Message used for every flavour of missing body.
pub const NO_DATA_MESSAGE: &str = "No data provided";

/// JSON body extractor with a missing-body check.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_body(&bytes, false).map(JsonBody)
    }
}

/// JSON body extractor for partial updates: `{}` is accepted.
#[derive(Debug, Clone)]
pub struct PartialJsonBody<T>(pub T);

impl<T, S> FromRequest<S> for PartialJsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        parse_body(&bytes, true).map(PartialJsonBody)
    }
}

/// Path extractor whose rejection is a JSON 404.
///
/// A segment that does not parse (e.g. `/planets/abc`) cannot name an
/// existing row, so it is reported the same way as an unknown id.
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(PathParam(value)),
            Err(rejection) => {
                let path = parts.uri.path();
                tracing::debug!(path, error = %rejection.body_text(), "Rejected path parameter");
                Err(AppError::NotFound(format!("No resource at {path}")))
            }
        }
    }
}

/// Parse raw body bytes, rejecting empty payloads before deserializing.
///
/// With `allow_empty_object`, `{}` passes through to `T`.
fn parse_body<T: DeserializeOwned>(bytes: &[u8], allow_empty_object: bool) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest(NO_DATA_MESSAGE.into()));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    let empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty() && !allow_empty_object,
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Err(AppError::BadRequest(NO_DATA_MESSAGE.into()));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}
