//! Axum extractors whose rejections are already classified.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::params::parse_id;

/// A numeric path identifier such as `review_id` or `comment_id`.
///
/// Anything that is not an integer is rejected as `MalformedIdentifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub i64);

impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MalformedIdentifier)?;
        parse_id(&raw).map(NumericId)
    }
}

/// JSON request body. Decoding failures become `MalformedBody`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                log_rejection(&rejection);
                Err(ApiError::MalformedBody)
            }
        }
    }
}

fn log_rejection(rejection: &JsonRejection) {
    tracing::debug!(reason = %rejection.body_text(), "rejected request body");
}

/// JSON request body that may be omitted entirely.
///
/// An empty (or all-whitespace) body yields `T::default()`. A non-empty body
/// is decoded as JSON whatever its `Content-Type`; decoding failures become
/// `MalformedBody`.
#[derive(Debug, Clone, Default)]
pub struct OptionalJsonBody<T>(pub T);

impl<T, S> FromRequest<S> for OptionalJsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "unreadable request body");
            ApiError::MalformedBody
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJsonBody(T::default()));
        }
        serde_json::from_slice(&bytes)
            .map(OptionalJsonBody)
            .map_err(|err| {
                tracing::debug!(error = %err, "rejected request body");
                ApiError::MalformedBody
            })
    }
}
