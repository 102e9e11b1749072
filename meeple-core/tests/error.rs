use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use meeple_core::ApiError;

async fn error_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn bad_request_kinds_share_status() {
    for err in [
        ApiError::MalformedIdentifier,
        ApiError::InvalidQuery,
        ApiError::InvalidColumn,
        ApiError::InvalidOrder,
        ApiError::MalformedBody,
        ApiError::MissingField(vec!["body".into()]),
        ApiError::Constraint("UNIQUE constraint failed".into()),
    ] {
        let (status, _) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn malformed_identifier_message() {
    let (status, body) = error_parts(ApiError::MalformedIdentifier).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Bad Request");
}

#[tokio::test]
async fn invalid_query_message() {
    let (_, body) = error_parts(ApiError::InvalidQuery).await;
    assert_eq!(body["msg"], "Invalid Query");
}

#[tokio::test]
async fn missing_field_names_fields() {
    let (status, body) =
        error_parts(ApiError::MissingField(vec!["username".into(), "body".into()])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "Missing required field: username, body");
}

#[tokio::test]
async fn not_found_carries_message() {
    let (status, body) = error_parts(ApiError::NotFound("Review Not Found".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Review Not Found");
}

#[tokio::test]
async fn parent_not_found_is_404() {
    let (status, body) = error_parts(ApiError::ParentNotFound(
        "The review you are attempting to view does not exist".into(),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["msg"],
        "The review you are attempting to view does not exist"
    );
}

#[tokio::test]
async fn route_not_found_message() {
    let (status, body) = error_parts(ApiError::RouteNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Route Not Found");
}

#[tokio::test]
async fn unprocessable_reference_is_422() {
    let (status, _) = error_parts(ApiError::UnprocessableReference(
        "FOREIGN KEY constraint failed".into(),
    ))
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn constraint_detail_is_not_leaked() {
    let (_, body) = error_parts(ApiError::Constraint("UNIQUE constraint failed: categories.slug".into())).await;
    assert_eq!(body["msg"], "Invalid input");
}

#[tokio::test]
async fn internal_detail_is_not_leaked() {
    let (status, body) = error_parts(ApiError::Internal("pool timed out".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["msg"], "Internal Server Error");
}

#[test]
fn display_formatting() {
    assert_eq!(ApiError::NotFound("x".into()).to_string(), "Not Found: x");
    assert_eq!(
        ApiError::InvalidOrder.to_string(),
        "Bad Request: invalid sort order"
    );
    assert_eq!(ApiError::Internal("v".into()).to_string(), "Internal Error: v");
}

#[test]
fn from_io_error_is_internal() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err: ApiError = io_err.into();
    match err {
        ApiError::Internal(msg) => assert!(msg.contains("file missing")),
        other => panic!("expected Internal, got {other}"),
    }
}
