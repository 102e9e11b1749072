use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use meeple_core::{require_fields, ApiResult, JsonBody, NumericId, OptionalJsonBody};
use meeple_data::CommentListing;
use serde_json::{json, Value};

use crate::models::{NewComment, VoteUpdate};
use crate::services::CommentService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/reviews/{review_id}/comments",
            get(list_for_review).post(create),
        )
        .route("/api/comments/{comment_id}", patch(update_votes).delete(remove))
}

async fn list_for_review(
    State(comments): State<CommentService>,
    NumericId(review_id): NumericId,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Value>> {
    let listing = CommentListing::from_query(review_id, query.as_deref())?;
    tracing::debug!(?listing, "listing comments");
    let page = comments.list_for_review(&listing).await?;
    Ok(Json(json!({
        "comments": page.items,
        "total_count": page.total_count,
    })))
}

async fn create(
    State(comments): State<CommentService>,
    NumericId(review_id): NumericId,
    JsonBody(body): JsonBody<NewComment>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    require_fields(&body)?;
    let comment = comments.create(review_id, body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "comment": comment }))))
}

async fn update_votes(
    State(comments): State<CommentService>,
    NumericId(comment_id): NumericId,
    OptionalJsonBody(body): OptionalJsonBody<VoteUpdate>,
) -> ApiResult<Json<Value>> {
    let comment = comments.update_votes(comment_id, body.delta()).await?;
    Ok(Json(json!({ "comment": comment })))
}

async fn remove(
    State(comments): State<CommentService>,
    NumericId(comment_id): NumericId,
) -> ApiResult<StatusCode> {
    comments.delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
