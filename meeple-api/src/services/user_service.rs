use meeple_core::{ApiError, ApiResult};
use meeple_data::DataError;
use sqlx::SqlitePool;

use crate::models::{User, UserSummary};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> ApiResult<Vec<UserSummary>> {
        let users =
            sqlx::query_as::<_, UserSummary>("SELECT username FROM users ORDER BY username")
                .fetch_all(&self.pool)
                .await
                .map_err(DataError::from)?;
        Ok(users)
    }

    pub async fn get(&self, username: &str) -> ApiResult<User> {
        sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(DataError::from)?
        .ok_or_else(|| ApiError::NotFound("User Not Found".into()))
    }
}
