//! Whitelists for the sort parameters of listing endpoints.
//!
//! Untrusted `sort_by` / `order` text is resolved to one of these enums before
//! any SQL is assembled; only the `&'static str` identifiers they map to ever
//! reach the query text.

use meeple_core::{ApiError, ApiResult};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an `order` value. Matching is case-sensitive.
    pub fn parse(raw: &str) -> ApiResult<Self> {
        match raw {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ApiError::InvalidOrder),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A closed set of columns a listing may be sorted by.
pub trait SortColumn: Copy + Sized + 'static {
    /// Every accepted `sort_by` value, paired with its column.
    const ALL: &'static [(&'static str, Self)];

    /// Fully qualified SQL identifier (or select-list alias).
    fn identifier(self) -> &'static str;

    /// Resolve a `sort_by` value against the whitelist.
    fn parse(raw: &str) -> ApiResult<Self> {
        Self::ALL
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, column)| *column)
            .ok_or(ApiError::InvalidColumn)
    }
}

/// Sortable columns of the review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    ReviewId,
    Title,
    Votes,
    #[default]
    CreatedAt,
    Category,
    Designer,
    Owner,
    CommentCount,
}

impl SortColumn for ReviewSort {
    const ALL: &'static [(&'static str, Self)] = &[
        ("review_id", ReviewSort::ReviewId),
        ("title", ReviewSort::Title),
        ("votes", ReviewSort::Votes),
        ("created_at", ReviewSort::CreatedAt),
        ("category", ReviewSort::Category),
        ("designer", ReviewSort::Designer),
        ("owner", ReviewSort::Owner),
        ("comment_count", ReviewSort::CommentCount),
    ];

    fn identifier(self) -> &'static str {
        match self {
            ReviewSort::ReviewId => "reviews.review_id",
            ReviewSort::Title => "reviews.title",
            ReviewSort::Votes => "reviews.votes",
            ReviewSort::CreatedAt => "reviews.created_at",
            ReviewSort::Category => "reviews.category",
            ReviewSort::Designer => "reviews.designer",
            ReviewSort::Owner => "reviews.owner",
            ReviewSort::CommentCount => "comment_count",
        }
    }
}

/// Sortable columns of a review's comment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSort {
    CommentId,
    Votes,
    #[default]
    CreatedAt,
    Author,
    Body,
}

impl SortColumn for CommentSort {
    const ALL: &'static [(&'static str, Self)] = &[
        ("comment_id", CommentSort::CommentId),
        ("votes", CommentSort::Votes),
        ("created_at", CommentSort::CreatedAt),
        ("author", CommentSort::Author),
        ("body", CommentSort::Body),
    ];

    fn identifier(self) -> &'static str {
        match self {
            CommentSort::CommentId => "comments.comment_id",
            CommentSort::Votes => "comments.votes",
            CommentSort::CreatedAt => "comments.created_at",
            CommentSort::Author => "comments.author",
            CommentSort::Body => "comments.body",
        }
    }
}
