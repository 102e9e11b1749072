//! Normalisation of untrusted query strings and path identifiers.

use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};

/// Parse a query string into key-value pairs, preserving order and duplicates.
pub fn parse_query_string(query: Option<&str>) -> Vec<(String, String)> {
    match query {
        Some(q) => form_urlencoded::parse(q.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        None => Vec::new(),
    }
}

/// Query-string parameters checked against the keys an endpoint recognises.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    /// Parse `query`, rejecting any key outside `allowed` and any key given twice.
    pub fn parse(query: Option<&str>, allowed: &[&str]) -> ApiResult<Self> {
        let mut values = HashMap::new();
        for (key, value) in parse_query_string(query) {
            if !allowed.contains(&key.as_str()) {
                tracing::debug!(%key, "unrecognised query key");
                return Err(ApiError::InvalidQuery);
            }
            if values.insert(key, value).is_some() {
                return Err(ApiError::InvalidQuery);
            }
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// A recognised key holding a positive integer no larger than `max`.
    pub fn positive_int(&self, key: &str, default: u32, max: u32) -> ApiResult<u32> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n >= 1 && n <= max => Ok(n),
                _ => Err(ApiError::InvalidQuery),
            },
        }
    }
}

/// Parse a path segment declared numeric.
pub fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::MalformedIdentifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["sort_by", "order", "page"];

    #[test]
    fn accepts_recognised_keys() {
        let params = QueryParams::parse(Some("sort_by=votes&order=asc"), KEYS).unwrap();
        assert_eq!(params.get("sort_by"), Some("votes"));
        assert_eq!(params.get("order"), Some("asc"));
        assert_eq!(params.get("page"), None);
    }

    #[test]
    fn no_query_string_is_empty() {
        let params = QueryParams::parse(None, KEYS).unwrap();
        assert_eq!(params.get("sort_by"), None);
        assert_eq!(params.get("page"), None);
    }

    #[test]
    fn unknown_key_is_invalid_query() {
        let err = QueryParams::parse(Some("sort_by=votes&colour=red"), KEYS).unwrap_err();
        assert_eq!(err, ApiError::InvalidQuery);
    }

    #[test]
    fn repeated_key_is_invalid_query() {
        let err = QueryParams::parse(Some("order=asc&order=desc"), KEYS).unwrap_err();
        assert_eq!(err, ApiError::InvalidQuery);
    }

    #[test]
    fn values_are_percent_decoded() {
        let params = QueryParams::parse(Some("sort_by=created%5Fat"), KEYS).unwrap();
        assert_eq!(params.get("sort_by"), Some("created_at"));
    }

    #[test]
    fn positive_int_bounds() {
        let params = QueryParams::parse(Some("page=3"), KEYS).unwrap();
        assert_eq!(params.positive_int("page", 1, 100).unwrap(), 3);
        assert_eq!(params.positive_int("order", 7, 100).unwrap(), 7);

        for bad in ["page=0", "page=-1", "page=abc", "page=101", "page="] {
            let params = QueryParams::parse(Some(bad), KEYS).unwrap();
            assert_eq!(
                params.positive_int("page", 1, 100).unwrap_err(),
                ApiError::InvalidQuery,
                "{bad}"
            );
        }
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("notanumber!").unwrap_err(), ApiError::MalformedIdentifier);
        assert_eq!(parse_id("1.5").unwrap_err(), ApiError::MalformedIdentifier);
        assert_eq!(parse_id("").unwrap_err(), ApiError::MalformedIdentifier);
    }
}
