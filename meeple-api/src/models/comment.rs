use chrono::NaiveDateTime;
use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub author: Option<String>,
    pub review_id: i64,
    pub votes: i64,
    pub body: String,
    pub created_at: NaiveDateTime,
    #[sqlx(default)]
    #[serde(skip)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewComment {
    #[garde(required)]
    pub username: Option<String>,
    #[garde(required)]
    pub body: Option<String>,
}
