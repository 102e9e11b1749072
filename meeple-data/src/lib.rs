//! # meeple-data
//!
//! Data access for the review API:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sort`] | Whitelisted sort columns and directions |
//! | [`listing`] | Validated listing parameters and the statements built from them |
//! | [`query`] | Parameterized SELECT builder |
//! | [`page`] | Pagination parameters and result pages |
//! | [`error`] | Store error classification |
//! | [`db`] / [`schema`] | Pool bootstrap and table creation |

pub mod db;
pub mod error;
pub mod listing;
pub mod page;
pub mod query;
pub mod schema;
pub mod sort;

pub use db::{connect, DatabaseConfig};
pub use error::DataError;
pub use listing::{review_detail, CommentListing, ReviewListing};
pub use page::{Page, Pageable};
pub use query::{BindValue, BuiltQuery, QueryError, SelectBuilder};
pub use sort::{CommentSort, ReviewSort, SortColumn, SortOrder};
