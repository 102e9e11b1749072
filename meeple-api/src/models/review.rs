use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub review_id: i64,
    pub title: String,
    pub review_body: String,
    pub designer: String,
    pub review_img_url: String,
    pub votes: i64,
    /// Null once the category is deleted.
    pub category: Option<String>,
    /// Null once the owning user is deleted.
    pub owner: Option<String>,
    pub created_at: NaiveDateTime,
    /// Present on reads that join the comment table.
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
    /// Window count of the listing this row came from.
    #[sqlx(default)]
    #[serde(skip)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewReview {
    #[garde(required)]
    pub owner: Option<String>,
    #[garde(required)]
    pub title: Option<String>,
    #[garde(required)]
    pub review_body: Option<String>,
    #[garde(required)]
    pub designer: Option<String>,
    #[garde(required)]
    pub category: Option<String>,
    #[garde(skip)]
    pub review_img_url: Option<String>,
}
