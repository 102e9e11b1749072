use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use meeple_core::{require_fields, ApiResult, JsonBody};
use serde_json::{json, Value};

use crate::models::NewCategory;
use crate::services::CategoryService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/categories", get(list).post(create))
}

async fn list(State(categories): State<CategoryService>) -> ApiResult<Json<Value>> {
    let categories = categories.list().await?;
    Ok(Json(json!({ "categories": categories })))
}

async fn create(
    State(categories): State<CategoryService>,
    JsonBody(body): JsonBody<NewCategory>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    require_fields(&body)?;
    let category = categories.create(body).await?;
    Ok((StatusCode::CREATED, Json(json!({ "category": category }))))
}
