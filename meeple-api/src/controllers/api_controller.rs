use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::catalog;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api", get(describe))
}

async fn describe() -> Json<Value> {
    Json(catalog::endpoints())
}
