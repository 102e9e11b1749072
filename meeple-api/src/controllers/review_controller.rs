use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use meeple_core::{require_fields, ApiResult, JsonBody, NumericId, OptionalJsonBody};
use meeple_data::ReviewListing;
use serde_json::{json, Value};

use crate::models::{NewReview, VoteUpdate};
use crate::services::ReviewService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/reviews", get(list).post(create))
        .route(
            "/api/reviews/{review_id}",
            get(get_by_id).patch(update_votes).delete(remove),
        )
}

async fn list(
    State(reviews): State<ReviewService>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<Value>> {
    let listing = ReviewListing::from_query(query.as_deref())?;
    tracing::debug!(?listing, "listing reviews");
    let page = reviews.list(&listing).await?;
    Ok(Json(json!({
        "reviews": page.items,
        "total_count": page.total_count,
    })))
}

async fn create(
    State(reviews): State<ReviewService>,
    JsonBody(body): JsonBody<NewReview>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    require_fields(&body)?;
    let review = reviews.create(body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "review": review }))))
}

async fn get_by_id(
    State(reviews): State<ReviewService>,
    NumericId(review_id): NumericId,
) -> ApiResult<Json<Value>> {
    let review = reviews.get(review_id).await?;
    Ok(Json(json!({ "review": review })))
}

async fn update_votes(
    State(reviews): State<ReviewService>,
    NumericId(review_id): NumericId,
    OptionalJsonBody(body): OptionalJsonBody<VoteUpdate>,
) -> ApiResult<Json<Value>> {
    let review = reviews.update_votes(review_id, body.delta()).await?;
    Ok(Json(json!({ "review": review })))
}

async fn remove(
    State(reviews): State<ReviewService>,
    NumericId(review_id): NumericId,
) -> ApiResult<StatusCode> {
    reviews.delete(review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
