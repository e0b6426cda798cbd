//! Request extractors that reject with the error envelope instead of
//! axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use folio_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// Message returned when the body is missing, empty or not JSON at all.
pub const BODY_REQUIRED_MESSAGE: &str = "Body JSON requerido";

/// JSON request body.
///
/// Rejects with 400 when the body is absent, malformed, or an empty value
/// (`{}`, `[]`, `null`, `""`, `false`, `0`), and when the JSON does not fit
/// `T`. Unknown keys are ignored by the target DTOs.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateProject>) -> AppResult<...> { ... }
/// ```
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(BODY_REQUIRED_MESSAGE.into()))?;

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|_| AppError::BadRequest(BODY_REQUIRED_MESSAGE.into()))?;
        if is_empty_value(&value) {
            return Err(AppError::BadRequest(BODY_REQUIRED_MESSAGE.into()));
        }

        serde_json::from_value(value)
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("Body JSON inválido: {e}")))
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer cannot name any entity, so it is
/// answered like an unknown route (404).
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::RouteNotFound)?;
        Ok(EntityId(id))
    }
}
