use garde::Validate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCategory {
    #[garde(required)]
    pub slug: Option<String>,
    #[garde(required)]
    pub description: Option<String>,
}
