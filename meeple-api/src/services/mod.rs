//! Services resolve existence questions a bare row count cannot answer:
//! an empty listing is told apart from a missing parent or an unknown filter,
//! and writes that touch nothing become `NotFound`.

pub mod category_service;
pub mod comment_service;
pub mod review_service;
pub mod user_service;

pub use category_service::CategoryService;
pub use comment_service::CommentService;
pub use review_service::ReviewService;
pub use user_service::UserService;
