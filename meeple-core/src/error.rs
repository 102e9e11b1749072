use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Helper to create a JSON error response with the standard `{ "msg": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "msg": message.into() });
    (status, Json(body)).into_response()
}

/// Every failure a request can end in.
///
/// Components raise the most specific variant they can determine; the
/// `IntoResponse` impl below is the only place a variant becomes a status code
/// and a client-facing message.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A numeric path identifier did not parse as an integer.
    MalformedIdentifier,
    /// The query string carried an unrecognized or repeated key, or an
    /// unusable value for a recognized one.
    InvalidQuery,
    /// `sort_by` named a column outside the whitelist.
    InvalidColumn,
    /// `order` was something other than `asc` or `desc`.
    InvalidOrder,
    /// A required body field was absent or null.
    MissingField(Vec<String>),
    /// The request body was not valid JSON or a field had the wrong type.
    MalformedBody,
    /// The addressed resource does not exist.
    NotFound(String),
    /// The owning resource of a sub-collection does not exist.
    ParentNotFound(String),
    /// No route matched the request.
    RouteNotFound,
    /// The request was well-formed but references an entity that does not exist.
    UnprocessableReference(String),
    /// A store constraint rejected the write and nothing more specific applies.
    Constraint(String),
    /// Anything else. The detail is logged, never returned to the client.
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedIdentifier
            | ApiError::InvalidQuery
            | ApiError::InvalidColumn
            | ApiError::InvalidOrder
            | ApiError::MissingField(_)
            | ApiError::MalformedBody
            | ApiError::Constraint(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::ParentNotFound(_) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::UnprocessableReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    pub fn message(&self) -> String {
        match self {
            ApiError::MalformedIdentifier | ApiError::MalformedBody => "Bad Request".to_string(),
            ApiError::InvalidQuery => "Invalid Query".to_string(),
            ApiError::InvalidColumn => "Invalid sort_by column".to_string(),
            ApiError::InvalidOrder => "Invalid order".to_string(),
            ApiError::MissingField(fields) => {
                format!("Missing required field: {}", fields.join(", "))
            }
            ApiError::NotFound(msg) | ApiError::ParentNotFound(msg) => msg.clone(),
            ApiError::RouteNotFound => "Route Not Found".to_string(),
            ApiError::UnprocessableReference(_) => {
                "Unprocessable Entity: referenced resource does not exist".to_string()
            }
            ApiError::Constraint(_) => "Invalid input".to_string(),
            ApiError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => tracing::error!(error = %detail, "request failed"),
            other => tracing::debug!(error = %other, "request rejected"),
        }
        error_response(self.status(), self.message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MalformedIdentifier => write!(f, "Bad Request: malformed identifier"),
            ApiError::InvalidQuery => write!(f, "Bad Request: invalid query"),
            ApiError::InvalidColumn => write!(f, "Bad Request: invalid sort column"),
            ApiError::InvalidOrder => write!(f, "Bad Request: invalid sort order"),
            ApiError::MissingField(fields) => {
                write!(f, "Bad Request: missing field(s) {}", fields.join(", "))
            }
            ApiError::MalformedBody => write!(f, "Bad Request: malformed body"),
            ApiError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            ApiError::ParentNotFound(msg) => write!(f, "Parent Not Found: {msg}"),
            ApiError::RouteNotFound => write!(f, "Not Found: route"),
            ApiError::UnprocessableReference(msg) => write!(f, "Unprocessable Entity: {msg}"),
            ApiError::Constraint(msg) => write!(f, "Constraint Violation: {msg}"),
            ApiError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for ApiError {}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Fallback handler for requests no route matched.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}
