mod app;
pub mod fixtures;
mod path;

pub use app::{TestApp, TestRequest, TestResponse};
pub use fixtures::{seed, seeded_pool};
pub use path::{resolve_path, tokenize_path, PathToken};
