use meeple_core::{ApiError, ApiResult};
use meeple_data::{CommentListing, DataError, Page};
use sqlx::SqlitePool;

use crate::models::{Comment, NewComment};
use crate::services::ReviewService;

const PARENT_MISSING: &str = "The review you are attempting to view does not exist";
const COMMENT_NOT_FOUND: &str = "Comment Not Found";
const DELETE_MISSING: &str = "The comment you are attempting to delete does not exist";

#[derive(Clone)]
pub struct CommentService {
    pool: SqlitePool,
    reviews: ReviewService,
}

impl CommentService {
    pub fn new(pool: SqlitePool, reviews: ReviewService) -> Self {
        Self { pool, reviews }
    }

    /// List a review's comments.
    ///
    /// The parent check and the listing are separate statements; a review
    /// deleted in between yields an empty page.
    pub async fn list_for_review(&self, listing: &CommentListing) -> ApiResult<Page<Comment>> {
        if !self.reviews.exists(listing.review_id).await? {
            return Err(ApiError::ParentNotFound(PARENT_MISSING.into()));
        }

        let comments: Vec<Comment> = listing.build()?.fetch_all(&self.pool).await?;
        let total = match comments.first() {
            Some(first) => first.total_count.unwrap_or(comments.len() as i64).max(0) as u64,
            None if listing.pageable.page > 1 => {
                let count: Option<(i64,)> =
                    listing.build_count()?.fetch_optional(&self.pool).await?;
                count.map(|(n,)| n.max(0) as u64).unwrap_or(0)
            }
            None => 0,
        };
        Ok(Page::new(comments, &listing.pageable, total))
    }

    /// Fields must already have passed `require_fields`. A missing review or
    /// author surfaces as `UnprocessableReference`.
    pub async fn create(&self, review_id: i64, req: NewComment) -> ApiResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (body, author, review_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(req.body)
        .bind(req.username)
        .bind(review_id)
        .fetch_one(&self.pool)
        .await
        .map_err(DataError::from)?;

        tracing::info!(comment_id = comment.comment_id, review_id, "comment created");
        Ok(comment)
    }

    pub async fn update_votes(&self, comment_id: i64, inc_votes: i64) -> ApiResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING *",
        )
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DataError::from)?
        .ok_or_else(|| ApiError::NotFound(COMMENT_NOT_FOUND.into()))
    }

    pub async fn delete(&self, comment_id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(DataError::from)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(DELETE_MISSING.into()));
        }
        tracing::info!(comment_id, "comment deleted");
        Ok(())
    }
}
