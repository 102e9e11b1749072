use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::services::{CategoryService, CommentService, ReviewService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub categories: CategoryService,
    pub reviews: ReviewService,
    pub comments: CommentService,
    pub users: UserService,
}

impl AppState {
    /// Wire every service onto one pool.
    pub fn new(pool: SqlitePool) -> Self {
        let categories = CategoryService::new(pool.clone());
        let reviews = ReviewService::new(pool.clone(), categories.clone());
        let comments = CommentService::new(pool.clone(), reviews.clone());
        let users = UserService::new(pool.clone());
        Self {
            pool,
            categories,
            reviews,
            comments,
            users,
        }
    }
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.categories.clone()
    }
}

impl FromRef<AppState> for ReviewService {
    fn from_ref(state: &AppState) -> Self {
        state.reviews.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(state: &AppState) -> Self {
        state.comments.clone()
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}
