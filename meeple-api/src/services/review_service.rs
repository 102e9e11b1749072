use meeple_core::{ApiError, ApiResult};
use meeple_data::schema::DEFAULT_REVIEW_IMG_URL;
use meeple_data::{review_detail, DataError, Page, ReviewListing};
use sqlx::SqlitePool;

use crate::models::{NewReview, Review};
use crate::services::CategoryService;

const UNKNOWN_CATEGORY: &str = "Category does not exist in the database";
const REVIEW_NOT_FOUND: &str = "Review Not Found";
const DELETE_MISSING: &str = "The review you are attempting to delete does not exist";

#[derive(Clone)]
pub struct ReviewService {
    pool: SqlitePool,
    categories: CategoryService,
}

impl ReviewService {
    pub fn new(pool: SqlitePool, categories: CategoryService) -> Self {
        Self { pool, categories }
    }

    /// List reviews.
    ///
    /// An empty result with a category filter is only a success if the
    /// category exists.
    pub async fn list(&self, listing: &ReviewListing) -> ApiResult<Page<Review>> {
        let query = listing.build()?;
        let reviews: Vec<Review> = query.fetch_all(&self.pool).await?;

        if let Some(first) = reviews.first() {
            let total = first.total_count.unwrap_or(reviews.len() as i64);
            return Ok(Page::new(reviews, &listing.pageable, total.max(0) as u64));
        }

        if let Some(category) = &listing.category {
            if !self.categories.exists(category).await? {
                return Err(ApiError::NotFound(UNKNOWN_CATEGORY.into()));
            }
        }

        // Past the last page the window count is unavailable.
        let total = if listing.pageable.page > 1 {
            let count: Option<(i64,)> = listing.build_count()?.fetch_optional(&self.pool).await?;
            count.map(|(n,)| n.max(0) as u64).unwrap_or(0)
        } else {
            0
        };
        Ok(Page::new(Vec::new(), &listing.pageable, total))
    }

    pub async fn get(&self, review_id: i64) -> ApiResult<Review> {
        review_detail(review_id)?
            .fetch_optional::<Review>(&self.pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(REVIEW_NOT_FOUND.into()))
    }

    pub async fn exists(&self, review_id: i64) -> ApiResult<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DataError::from)?;
        Ok(found.is_some())
    }

    /// Fields must already have passed `require_fields`. An unknown owner or
    /// category surfaces as `UnprocessableReference`.
    pub async fn create(&self, req: NewReview) -> ApiResult<Review> {
        let img_url = req
            .review_img_url
            .unwrap_or_else(|| DEFAULT_REVIEW_IMG_URL.to_string());

        let mut review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (owner, title, review_body, designer, category, review_img_url) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(req.owner)
        .bind(req.title)
        .bind(req.review_body)
        .bind(req.designer)
        .bind(req.category)
        .bind(img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(DataError::from)?;

        review.comment_count = Some(0);
        tracing::info!(review_id = review.review_id, "review created");
        Ok(review)
    }

    pub async fn update_votes(&self, review_id: i64, inc_votes: i64) -> ApiResult<Review> {
        sqlx::query_as::<_, Review>(
            "UPDATE reviews SET votes = votes + $1 WHERE review_id = $2 RETURNING *",
        )
        .bind(inc_votes)
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DataError::from)?
        .ok_or_else(|| ApiError::NotFound(REVIEW_NOT_FOUND.into()))
    }

    /// Delete a review and, through the cascade, its comments.
    pub async fn delete(&self, review_id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(&self.pool)
            .await
            .map_err(DataError::from)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(DELETE_MISSING.into()));
        }
        tracing::info!(review_id, "review deleted");
        Ok(())
    }
}
