use meeple_core::{ApiResult, QueryParams};
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters taken from the `page` and `limit` query keys.
///
/// `page` is 1-based. Both values must be positive integers and `limit` may not
/// exceed [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pageable {
    pub fn from_params(params: &QueryParams) -> ApiResult<Self> {
        Ok(Self {
            page: params.positive_int("page", 1, u32::MAX)?,
            limit: params.positive_int("limit", DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)?,
        })
    }

    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.limit)
    }
}

/// A page of results with the total number of matching rows.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total_count: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pageable: &Pageable, total_count: u64) -> Self {
        Self {
            items,
            page: pageable.page,
            limit: pageable.limit,
            total_count,
        }
    }
}
