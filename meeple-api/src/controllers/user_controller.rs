use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use meeple_core::ApiResult;
use serde_json::{json, Value};

use crate::services::UserService;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list))
        .route("/api/users/{username}", get(get_by_username))
}

async fn list(State(users): State<UserService>) -> ApiResult<Json<Value>> {
    let users = users.list().await?;
    Ok(Json(json!({ "users": users })))
}

async fn get_by_username(
    State(users): State<UserService>,
    Path(username): Path<String>,
) -> ApiResult<Json<Value>> {
    let user = users.get(&username).await?;
    Ok(Json(json!({ "user": user })))
}
