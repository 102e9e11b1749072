mod common;

use common::test_app;
use serde_json::{json, Value};

#[tokio::test]
async fn lists_reviews_newest_first_with_comment_counts() {
    let app = test_app().await;
    let resp = app
        .get("/api/reviews")
        .send()
        .await
        .assert_ok()
        .assert_json_path("reviews.len()", 10)
        .assert_json_path("total_count", 15)
        .assert_json_path("reviews[0].review_id", 14)
        .assert_json_path("reviews[1].review_id", 7);

    let reviews: Vec<Value> = resp.json_path("reviews");
    let dates: Vec<String> = reviews
        .iter()
        .map(|r| r["created_at"].as_str().unwrap().to_string())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert!(reviews.iter().all(|r| r["comment_count"].is_i64()));
}

#[tokio::test]
async fn sorts_and_filters_by_category() {
    let app = test_app().await;
    let resp = app
        .get("/api/reviews?sort_by=votes&order=desc&category=dexterity")
        .send()
        .await
        .assert_ok()
        .assert_json_path("total_count", 3);
    let reviews: Vec<Value> = resp.json_path("reviews");
    let votes: Vec<i64> = reviews.iter().map(|r| r["votes"].as_i64().unwrap()).collect();
    assert_eq!(votes, vec![9, 5, 1]);
}

#[tokio::test]
async fn category_with_spaces_and_apostrophe_is_matched_literally() {
    let app = test_app().await;
    app.get("/api/reviews?category=social%20deduction&limit=100")
        .send()
        .await
        .assert_ok()
        .assert_json_path("reviews.len()", 11);
    app.get("/api/reviews?category=children%27s+games")
        .send()
        .await
        .assert_ok()
        .assert_json_path("reviews", json!([]))
        .assert_json_path("total_count", 0);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = test_app().await;
    app.get("/api/reviews?category=bananas")
        .send()
        .await
        .assert_not_found()
        .assert_msg("Category does not exist in the database");
}

#[tokio::test]
async fn injection_attempt_in_category_is_just_an_unknown_category() {
    let app = test_app().await;
    app.get("/api/reviews?category=dexterity%27%3B%20DROP%20TABLE%20reviews%3B--")
        .send()
        .await
        .assert_not_found();
    app.get("/api/reviews")
        .send()
        .await
        .assert_ok()
        .assert_json_path("total_count", 15);
}

#[tokio::test]
async fn rejects_bad_listing_queries() {
    let app = test_app().await;
    app.get("/api/reviews?sort_by=bananas")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid sort_by column");
    app.get("/api/reviews?order=sideways")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid order");
    app.get("/api/reviews?colour=red")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid Query");
    app.get("/api/reviews?limit=0")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid Query");
    app.get("/api/reviews?page=abc")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Invalid Query");
}

#[tokio::test]
async fn pages_do_not_overlap() {
    let app = test_app().await;
    let first: Vec<Value> = app
        .get("/api/reviews?limit=5&page=1")
        .send()
        .await
        .assert_ok()
        .json_path("reviews");
    let second: Vec<Value> = app
        .get("/api/reviews?limit=5&page=2")
        .send()
        .await
        .assert_ok()
        .json_path("reviews");
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    assert!(first
        .iter()
        .all(|a| second.iter().all(|b| a["review_id"] != b["review_id"])));

    app.get("/api/reviews?limit=10&page=9")
        .send()
        .await
        .assert_ok()
        .assert_json_path("reviews", json!([]))
        .assert_json_path("total_count", 15);
}

#[tokio::test]
async fn gets_a_single_review() {
    let app = test_app().await;
    app.get("/api/reviews/2")
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.review_id", 2)
        .assert_json_path("review.title", "Jenga")
        .assert_json_path("review.category", "dexterity")
        .assert_json_path("review.comment_count", 3)
        .assert_json_path("review.created_at", "2021-01-18T10:01:41");
    app.get("/api/reviews/1")
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.comment_count", 0);
}

#[tokio::test]
async fn single_review_errors() {
    let app = test_app().await;
    app.get("/api/reviews/banana")
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Bad Request");
    app.get("/api/reviews/9999")
        .send()
        .await
        .assert_not_found()
        .assert_msg("Review Not Found");
}

#[tokio::test]
async fn created_review_round_trips() {
    let app = test_app().await;
    let created = app
        .post("/api/reviews")
        .json(&json!({
            "owner": "dav3rid",
            "title": "Azul",
            "review_body": "Tiles everywhere",
            "designer": "Michael Kiesling",
            "category": "euro game",
            "ignored": "extra keys are dropped"
        }))
        .send()
        .await
        .assert_created()
        .assert_json_path("review.votes", 0)
        .assert_json_path("review.comment_count", 0)
        .assert_json_path(
            "review.review_img_url",
            "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg",
        )
        .assert_json_path_fn("review.ignored", Value::is_null);

    let id: i64 = created.json_path("review.review_id");
    let fetched = app
        .get(&format!("/api/reviews/{id}"))
        .send()
        .await
        .assert_ok();
    let created_review: Value = created.json_path("review");
    let fetched_review: Value = fetched.json_path("review");
    assert_eq!(created_review, fetched_review);
}

#[tokio::test]
async fn creating_a_review_requires_every_field() {
    let app = test_app().await;
    app.post("/api/reviews")
        .json(&json!({
            "owner": "dav3rid",
            "title": "Azul",
            "review_body": "Tiles",
            "designer": null,
            "category": "euro game"
        }))
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Missing required field: designer");
    let msg: String = app
        .post("/api/reviews")
        .json(&json!({ "owner": "dav3rid", "title": "Azul" }))
        .send()
        .await
        .assert_bad_request()
        .json_path("msg");
    for field in ["review_body", "designer", "category"] {
        assert!(msg.contains(field), "{msg}");
    }
}

#[tokio::test]
async fn creating_a_review_for_an_unknown_owner_is_unprocessable() {
    let app = test_app().await;
    app.post("/api/reviews")
        .json(&json!({
            "owner": "nobody",
            "title": "Azul",
            "review_body": "Tiles",
            "designer": "Michael Kiesling",
            "category": "euro game"
        }))
        .send()
        .await
        .assert_unprocessable()
        .assert_msg("Unprocessable Entity: referenced resource does not exist");
}

#[tokio::test]
async fn creating_a_review_in_an_unknown_category_is_unprocessable() {
    let app = test_app().await;
    app.post("/api/reviews")
        .json(&json!({
            "owner": "mallionaire",
            "title": "Azul",
            "review_body": "Tiles",
            "designer": "Michael Kiesling",
            "category": "not-a-category"
        }))
        .send()
        .await
        .assert_unprocessable()
        .assert_msg("Unprocessable Entity: referenced resource does not exist");
    app.get("/api/reviews")
        .send()
        .await
        .assert_ok()
        .assert_json_path("total_count", 15);
}

#[tokio::test]
async fn patch_without_a_body_leaves_votes_unchanged() {
    let app = test_app().await;
    app.patch("/api/reviews/2")
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.review_id", 2)
        .assert_json_path("review.votes", 5);
}

#[tokio::test]
async fn patch_adjusts_votes() {
    let app = test_app().await;
    app.patch("/api/reviews/2")
        .json(&json!({ "inc_votes": 3 }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.votes", 8);
    app.patch("/api/reviews/2")
        .json(&json!({ "inc_votes": -10 }))
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.votes", -2);
    app.patch("/api/reviews/2")
        .json(&json!({}))
        .send()
        .await
        .assert_ok()
        .assert_json_path("review.votes", -2);
}

#[tokio::test]
async fn patch_errors() {
    let app = test_app().await;
    app.patch("/api/reviews/abc")
        .json(&json!({ "inc_votes": 1 }))
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Bad Request");
    app.patch("/api/reviews/2")
        .json(&json!({ "inc_votes": "one" }))
        .send()
        .await
        .assert_bad_request()
        .assert_msg("Bad Request");
    app.patch("/api/reviews/9999")
        .json(&json!({ "inc_votes": 1 }))
        .send()
        .await
        .assert_not_found()
        .assert_msg("Review Not Found");
}

#[tokio::test]
async fn delete_is_not_idempotent() {
    let app = test_app().await;
    let resp = app.delete("/api/reviews/2").send().await.assert_no_content();
    assert!(resp.body.is_empty());

    app.delete("/api/reviews/2")
        .send()
        .await
        .assert_not_found()
        .assert_msg("The review you are attempting to delete does not exist");
    app.get("/api/reviews/2").send().await.assert_not_found();
    app.get("/api/reviews/2/comments")
        .send()
        .await
        .assert_not_found();
    app.delete("/api/reviews/xyz").send().await.assert_bad_request();
}
