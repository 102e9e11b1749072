//! Machine-readable description of every route, served at `GET /api`.

use serde_json::{json, Map, Value};

/// One documented route.
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub queries: &'static [&'static str],
    pub example: fn() -> Value,
}

impl EndpointDoc {
    /// Catalog key, e.g. `GET /api/reviews`.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    fn to_json(&self) -> Value {
        let mut entry = Map::new();
        entry.insert("description".into(), json!(self.description));
        if !self.queries.is_empty() {
            entry.insert("queries".into(), json!(self.queries));
        }
        entry.insert("exampleResponse".into(), (self.example)());
        Value::Object(entry)
    }
}

fn review_example() -> Value {
    json!({
        "review_id": 1,
        "title": "One Night Ultimate Werewolf",
        "review_body": "We couldn't find the werewolf!",
        "designer": "Akihisa Okui",
        "review_img_url": "https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg",
        "votes": 5,
        "category": "social deduction",
        "owner": "mallionaire",
        "created_at": "2021-01-18T10:01:41",
        "comment_count": 2
    })
}

fn comment_example() -> Value {
    json!({
        "comment_id": 1,
        "author": "bainesface",
        "review_id": 2,
        "votes": 16,
        "body": "I loved this game too!",
        "created_at": "2017-11-22T12:43:33"
    })
}

pub const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "GET",
        path: "/api",
        description: "serves this description of every available endpoint",
        queries: &[],
        example: || json!({ "endpoints": {} }),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/categories",
        description: "serves an array of all categories",
        queries: &[],
        example: || {
            json!({ "categories": [{ "slug": "dexterity", "description": "Games involving physical skill" }] })
        },
    },
    EndpointDoc {
        method: "POST",
        path: "/api/categories",
        description: "adds a category from a body of slug and description",
        queries: &[],
        example: || {
            json!({ "category": { "slug": "dexterity", "description": "Games involving physical skill" } })
        },
    },
    EndpointDoc {
        method: "GET",
        path: "/api/reviews",
        description: "serves a page of reviews with their comment counts",
        queries: &["category", "sort_by", "order", "page", "limit"],
        example: || json!({ "reviews": [review_example()], "total_count": 1 }),
    },
    EndpointDoc {
        method: "POST",
        path: "/api/reviews",
        description: "adds a review from a body of owner, title, review_body, designer, category and an optional review_img_url",
        queries: &[],
        example: || json!({ "review": review_example() }),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/reviews/:review_id",
        description: "serves a single review with its comment count",
        queries: &[],
        example: || json!({ "review": review_example() }),
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/reviews/:review_id",
        description: "adds inc_votes to the review's votes",
        queries: &[],
        example: || json!({ "review": review_example() }),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/reviews/:review_id",
        description: "deletes a review and its comments",
        queries: &[],
        example: || Value::Null,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/reviews/:review_id/comments",
        description: "serves a page of comments on a review",
        queries: &["sort_by", "order", "page", "limit"],
        example: || json!({ "comments": [comment_example()], "total_count": 1 }),
    },
    EndpointDoc {
        method: "POST",
        path: "/api/reviews/:review_id/comments",
        description: "adds a comment from a body of username and body",
        queries: &[],
        example: || json!({ "comment": comment_example() }),
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/comments/:comment_id",
        description: "adds inc_votes to the comment's votes",
        queries: &[],
        example: || json!({ "comment": comment_example() }),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/comments/:comment_id",
        description: "deletes a comment",
        queries: &[],
        example: || Value::Null,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/users",
        description: "serves an array of usernames",
        queries: &[],
        example: || json!({ "users": [{ "username": "mallionaire" }] }),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/users/:username",
        description: "serves a single user",
        queries: &[],
        example: || {
            json!({ "user": {
                "username": "mallionaire",
                "name": "haz",
                "avatar_url": "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
            } })
        },
    },
];

/// The full catalog, keyed by `METHOD /path`.
pub fn endpoints() -> Value {
    let entries: Map<String, Value> = ENDPOINTS
        .iter()
        .map(|doc| (doc.key(), doc.to_json()))
        .collect();
    json!({ "endpoints": entries })
}
