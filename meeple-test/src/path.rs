//! Dotted JSON paths such as `reviews[0].votes` or `comments.len()`.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

pub fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        if segment == "len()" {
            tokens.push(PathToken::Len);
            continue;
        }
        let (field, mut rest) = match segment.find('[') {
            Some(pos) => segment.split_at(pos),
            None => (segment, ""),
        };
        if !field.is_empty() {
            tokens.push(PathToken::Field(field.to_string()));
        }
        while let Some(stripped) = rest.strip_prefix('[') {
            let end = stripped.find(']').expect("unclosed bracket in JSON path");
            let index = stripped[..end]
                .parse()
                .expect("non-numeric array index in JSON path");
            tokens.push(PathToken::Index(index));
            rest = &stripped[end + 1..];
        }
    }
    tokens
}

/// Resolve `path` against `root`. Missing fields and indices resolve to `null`.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for token in tokenize_path(path) {
        current = match token {
            PathToken::Field(name) => current.get(&name).cloned().unwrap_or(Value::Null),
            PathToken::Index(idx) => current.get(idx).cloned().unwrap_or(Value::Null),
            PathToken::Len => {
                let len = match &current {
                    Value::Array(a) => a.len(),
                    Value::Object(o) => o.len(),
                    Value::String(s) => s.len(),
                    other => panic!("len() applied to non-collection in \"{path}\": {other}"),
                };
                Value::from(len)
            }
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tokenizes_fields_indices_and_len() {
        assert_eq!(
            tokenize_path("reviews[0].votes"),
            vec![
                PathToken::Field("reviews".into()),
                PathToken::Index(0),
                PathToken::Field("votes".into()),
            ]
        );
        assert_eq!(
            tokenize_path("grid[1][2]"),
            vec![
                PathToken::Field("grid".into()),
                PathToken::Index(1),
                PathToken::Index(2),
            ]
        );
        assert_eq!(
            tokenize_path("comments.len()"),
            vec![PathToken::Field("comments".into()), PathToken::Len]
        );
    }

    #[test]
    fn resolves_against_a_body() {
        let body = json!({ "reviews": [{ "votes": 9 }, { "votes": 5 }], "total_count": 2 });
        assert_eq!(resolve_path(&body, "reviews[1].votes"), json!(5));
        assert_eq!(resolve_path(&body, "reviews.len()"), json!(2));
        assert_eq!(resolve_path(&body, "reviews[7].votes"), Value::Null);
        assert_eq!(resolve_path(&body, "missing"), Value::Null);
    }
}
