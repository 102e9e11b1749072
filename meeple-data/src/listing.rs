//! Validated listing parameters and the statements built from them.

use meeple_core::{ApiError, ApiResult, QueryParams};

use crate::page::Pageable;
use crate::query::{BindValue, BuiltQuery, QueryError, SelectBuilder};
use crate::sort::{CommentSort, ReviewSort, SortColumn, SortOrder};

/// Query keys accepted by `GET /api/reviews`.
pub const REVIEW_LISTING_KEYS: &[&str] = &["sort_by", "order", "category", "page", "limit"];

/// Query keys accepted by `GET /api/reviews/:review_id/comments`.
pub const COMMENT_LISTING_KEYS: &[&str] = &["sort_by", "order", "page", "limit"];

const COMMENT_COUNT: &str = "CAST(COUNT(comments.comment_id) AS INTEGER) AS comment_count";
const WINDOW_TOTAL: &str = "COUNT(*) OVER() AS total_count";
const COMMENTS_OF_REVIEW: &str = "comments.review_id = reviews.review_id";

fn parse_sort<C: SortColumn + Default>(params: &QueryParams) -> ApiResult<(C, SortOrder)> {
    let column = match params.get("sort_by") {
        Some(raw) => C::parse(raw)?,
        None => C::default(),
    };
    let order = match params.get("order") {
        Some(raw) => SortOrder::parse(raw)?,
        None => SortOrder::default(),
    };
    Ok((column, order))
}

/// Parameters of the review listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListing {
    pub sort_by: ReviewSort,
    pub order: SortOrder,
    pub category: Option<String>,
    pub pageable: Pageable,
}

impl ReviewListing {
    /// Validate a raw query string.
    ///
    /// Checks run in a fixed order: key set, `sort_by`, `order`, `category`,
    /// then pagination.
    pub fn from_query(query: Option<&str>) -> ApiResult<Self> {
        let params = QueryParams::parse(query, REVIEW_LISTING_KEYS)?;
        let (sort_by, order) = parse_sort::<ReviewSort>(&params)?;
        let category = match params.get("category") {
            Some("") => return Err(ApiError::InvalidQuery),
            Some(slug) => Some(slug.to_string()),
            None => None,
        };
        let pageable = Pageable::from_params(&params)?;
        Ok(Self {
            sort_by,
            order,
            category,
            pageable,
        })
    }

    fn select(&self) -> SelectBuilder {
        let mut select = SelectBuilder::new("reviews")
            .column("reviews.*")
            .column(COMMENT_COUNT)
            .column(WINDOW_TOTAL)
            .left_join("comments", COMMENTS_OF_REVIEW);
        if let Some(category) = &self.category {
            select = select.where_eq("reviews.category", BindValue::text(category.as_str()));
        }
        select
    }

    /// One page of reviews with `comment_count` and the window `total_count`.
    pub fn build(&self) -> Result<BuiltQuery, QueryError> {
        let mut select = self
            .select()
            .group_by("reviews.review_id")
            .order_by(self.sort_by.identifier(), self.order);
        if self.sort_by != ReviewSort::ReviewId {
            select = select.order_by("reviews.review_id", self.order);
        }
        select
            .limit(u64::from(self.pageable.limit))
            .offset(self.pageable.offset())
            .build()
    }

    /// Number of reviews matching the filter, independent of the page.
    pub fn build_count(&self) -> Result<BuiltQuery, QueryError> {
        let mut select = SelectBuilder::new("reviews");
        if let Some(category) = &self.category {
            select = select.where_eq("reviews.category", BindValue::text(category.as_str()));
        }
        select.build_count("reviews.review_id")
    }
}

/// Parameters of a review's comment listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentListing {
    pub review_id: i64,
    pub sort_by: CommentSort,
    pub order: SortOrder,
    pub pageable: Pageable,
}

impl CommentListing {
    pub fn from_query(review_id: i64, query: Option<&str>) -> ApiResult<Self> {
        let params = QueryParams::parse(query, COMMENT_LISTING_KEYS)?;
        let (sort_by, order) = parse_sort::<CommentSort>(&params)?;
        let pageable = Pageable::from_params(&params)?;
        Ok(Self {
            review_id,
            sort_by,
            order,
            pageable,
        })
    }

    fn select(&self) -> SelectBuilder {
        SelectBuilder::new("comments").where_eq("comments.review_id", BindValue::Int(self.review_id))
    }

    pub fn build(&self) -> Result<BuiltQuery, QueryError> {
        let mut select = self
            .select()
            .column("comments.*")
            .column(WINDOW_TOTAL)
            .order_by(self.sort_by.identifier(), self.order);
        if self.sort_by != CommentSort::CommentId {
            select = select.order_by("comments.comment_id", self.order);
        }
        select
            .limit(u64::from(self.pageable.limit))
            .offset(self.pageable.offset())
            .build()
    }

    pub fn build_count(&self) -> Result<BuiltQuery, QueryError> {
        self.select().build_count("comments.comment_id")
    }
}

/// A single review with its `comment_count`.
pub fn review_detail(review_id: i64) -> Result<BuiltQuery, QueryError> {
    SelectBuilder::new("reviews")
        .column("reviews.*")
        .column(COMMENT_COUNT)
        .left_join("comments", COMMENTS_OF_REVIEW)
        .where_eq("reviews.review_id", BindValue::Int(review_id))
        .group_by("reviews.review_id")
        .build()
}
