use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use meeple_test::TestApp;
use serde_json::{json, Value};

fn router() -> Router {
    Router::new()
        .route("/items", get(|| async { Json(json!({ "items": [1, 2, 3] })) }))
        .route(
            "/echo",
            post(|Json(body): Json<Value>| async move { (StatusCode::CREATED, Json(body)) }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "msg": "gone" }))) }),
        )
}

#[tokio::test]
async fn get_and_assert_json_paths() {
    let app = TestApp::new(router());
    let resp = app
        .get("/items")
        .send()
        .await
        .assert_ok()
        .assert_json_path("items.len()", 3)
        .assert_json_path("items[2]", 3);
    let first: i64 = resp.json_path("items[0]");
    assert_eq!(first, 1);
}

#[tokio::test]
async fn post_json_sets_content_type() {
    let app = TestApp::new(router());
    app.post("/echo")
        .json(&json!({ "name": "meeple" }))
        .send()
        .await
        .assert_created()
        .assert_json_path("name", "meeple");
}

#[tokio::test]
async fn error_body_assertion() {
    let app = TestApp::new(router());
    app.get("/missing").send().await.assert_not_found().assert_msg("gone");
}

#[tokio::test]
async fn seeded_pool_loads_every_fixture() {
    let pool = meeple_test::seeded_pool().await;
    let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(&pool)
        .await
        .unwrap();
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(reviews as usize, meeple_test::fixtures::REVIEWS.len());
    assert_eq!(comments as usize, meeple_test::fixtures::COMMENTS.len());
}
