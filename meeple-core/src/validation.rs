//! Required-field checks for creation bodies.
//!
//! Request bodies declare their fields as `Option<T>` with `#[garde(required)]`,
//! so an absent key and an explicit `null` are reported the same way.

use crate::error::{ApiError, ApiResult};

// Re-export garde::Validate for convenience.
pub use garde::Validate;

/// Run `garde` validation, reporting every failing field as missing.
pub fn require_fields<T>(value: &T) -> ApiResult<()>
where
    T: Validate,
    T::Context: Default,
{
    value.validate().map_err(|report| {
        let mut fields: Vec<String> = Vec::new();
        for (path, _) in report.iter() {
            let field = path.to_string();
            let field = if field.is_empty() { "value".to_string() } else { field };
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        ApiError::MissingField(fields)
    })
}
