pub mod category;
pub mod comment;
pub mod review;
pub mod user;

pub use category::{Category, NewCategory};
pub use comment::{Comment, NewComment};
pub use review::{NewReview, Review};
pub use user::{User, UserSummary};

use serde::Deserialize;

/// Body of the vote-increment endpoints. An absent or null `inc_votes` is 0.
#[derive(Debug, Default, Deserialize)]
pub struct VoteUpdate {
    #[serde(default)]
    pub inc_votes: Option<i64>,
}

impl VoteUpdate {
    pub fn delta(&self) -> i64 {
        self.inc_votes.unwrap_or(0)
    }
}
