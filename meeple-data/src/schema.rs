//! Initial table creation.

use sqlx::SqlitePool;

use crate::error::DataError;

pub const DEFAULT_REVIEW_IMG_URL: &str =
    "https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg";

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    slug TEXT PRIMARY KEY,
    description TEXT NOT NULL
)";

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar_url TEXT
)";

// AUTOINCREMENT keeps deleted ids from being handed out again.
const CREATE_REVIEWS: &str = "CREATE TABLE IF NOT EXISTS reviews (
    review_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    review_body TEXT NOT NULL,
    designer TEXT NOT NULL,
    review_img_url TEXT NOT NULL DEFAULT 'https://images.pexels.com/photos/163064/play-stone-network-networked-interactive-163064.jpeg',
    votes INTEGER NOT NULL DEFAULT 0,
    category TEXT REFERENCES categories(slug) ON DELETE SET NULL,
    owner TEXT REFERENCES users(username) ON DELETE SET NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comments (
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    author TEXT REFERENCES users(username) ON DELETE SET NULL,
    review_id INTEGER NOT NULL REFERENCES reviews(review_id) ON DELETE CASCADE,
    votes INTEGER NOT NULL DEFAULT 0,
    body TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Create the four tables if they do not exist yet, parents first.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), DataError> {
    for statement in [CREATE_CATEGORIES, CREATE_USERS, CREATE_REVIEWS, CREATE_COMMENTS] {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("schema ready");
    Ok(())
}
