mod common;

use axum::http::Method;
use common::test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn lists_categories() {
    let app = test_app().await;
    let resp = app
        .get("/api/categories")
        .send()
        .await
        .assert_ok()
        .assert_json_path("categories.len()", 4);
    let categories: Vec<Value> = resp.json_path("categories");
    assert!(categories
        .iter()
        .all(|c| c["slug"].is_string() && c["description"].is_string()));
}

#[tokio::test]
async fn creates_a_category() {
    let app = test_app().await;
    app.post("/api/categories")
        .json(&json!({ "slug": "deck building", "description": "Build a deck as you play" }))
        .send()
        .await
        .assert_created()
        .assert_json_path(
            "category",
            json!({ "slug": "deck building", "description": "Build a deck as you play" }),
        );
    app.get("/api/reviews?category=deck%20building")
        .send()
        .await
        .assert_ok()
        .assert_json_path("reviews.len()", 0);
}

#[tokio::test]
async fn category_creation_errors() {
    let app = test_app().await;
    app.post("/api/categories")
        .json(&json!({ "slug": "dexterity", "description": "Again" }))
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid input");
    app.post("/api/categories")
        .json(&json!({ "slug": "party" }))
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Missing required field: description");
}

#[tokio::test]
async fn lists_users_and_gets_one() {
    let app = test_app().await;
    app.get("/api/users")
        .send()
        .await
        .assert_ok()
        .assert_json_path("users.len()", 4)
        .assert_json_path_fn("users[0]", |u| {
            u.as_object().map(|o| o.len() == 1 && o.contains_key("username")) == Some(true)
        });
    app.get("/api/users/mallionaire")
        .send()
        .await
        .assert_ok()
        .assert_json_path("user.username", "mallionaire")
        .assert_json_path("user.name", "haz");
    app.get("/api/users/nobody")
        .send()
        .await
        .assert_not_found()
        .assert_msg("User Not Found");
}

#[tokio::test]
async fn describes_every_endpoint() {
    let app = test_app().await;
    let resp = app.get("/api").send().await.assert_ok();
    let endpoints: serde_json::Map<String, Value> = resp.json_path("endpoints");
    for key in [
        "GET /api",
        "GET /api/categories",
        "GET /api/reviews",
        "GET /api/reviews/:review_id",
        "PATCH /api/reviews/:review_id",
        "DELETE /api/reviews/:review_id",
        "GET /api/reviews/:review_id/comments",
        "POST /api/reviews/:review_id/comments",
        "PATCH /api/comments/:comment_id",
        "DELETE /api/comments/:comment_id",
        "GET /api/users",
        "GET /api/users/:username",
    ] {
        assert!(endpoints.contains_key(key), "missing {key}");
    }
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let app = test_app().await;
    app.get("/api/not-a-route")
        .send()
        .await
        .assert_not_found()
        .assert_msg("Route Not Found");
    app.get("/nothing/here").send().await.assert_not_found();
}

#[tokio::test]
async fn unsupported_methods_are_route_not_found() {
    let app = test_app().await;
    app.request(Method::PUT, "/api/reviews")
        .send()
        .await
        .assert_not_found()
        .assert_msg("Route Not Found");
    app.delete("/api/users/mallionaire")
        .send()
        .await
        .assert_not_found()
        .assert_msg("Route Not Found");
    app.get("/api/users/mallionaire").send().await.assert_ok();
}
