use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Listing projection of a user.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub username: String,
}
