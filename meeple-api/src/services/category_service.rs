use meeple_core::ApiResult;
use meeple_data::DataError;
use sqlx::SqlitePool;

use crate::models::{Category, NewCategory};

#[derive(Clone)]
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT slug, description FROM categories ORDER BY slug",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DataError::from)?;
        Ok(categories)
    }

    pub async fn exists(&self, slug: &str) -> ApiResult<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM categories WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(DataError::from)?;
        Ok(found.is_some())
    }

    /// Fields must already have passed `require_fields`.
    pub async fn create(&self, req: NewCategory) -> ApiResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (slug, description) VALUES ($1, $2) \
             RETURNING slug, description",
        )
        .bind(req.slug)
        .bind(req.description)
        .fetch_one(&self.pool)
        .await
        .map_err(DataError::from)?;

        tracing::info!(slug = %category.slug, "category created");
        Ok(category)
    }
}
