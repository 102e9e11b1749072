use meeple_core::ApiError;

use crate::query::QueryError;

/// Outcomes of a store round trip that are not plain success.
#[derive(Debug)]
pub enum DataError {
    /// A foreign key referenced a row that does not exist.
    ForeignKey(String),
    /// Unique, not-null or check constraint violation.
    Constraint(String),
    /// A statement could not be assembled.
    Query(QueryError),
    Database(Box<dyn std::error::Error + Send + Sync>),
}

impl DataError {
    /// Construct a `Database` variant from any error type.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::ForeignKey(msg) => write!(f, "Foreign key violation: {msg}"),
            DataError::Constraint(msg) => write!(f, "Constraint violation: {msg}"),
            DataError::Query(err) => write!(f, "Query error: {err}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            DataError::Query(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                match db_err.kind() {
                    sqlx::error::ErrorKind::ForeignKeyViolation => DataError::ForeignKey(msg),
                    sqlx::error::ErrorKind::UniqueViolation
                    | sqlx::error::ErrorKind::NotNullViolation
                    | sqlx::error::ErrorKind::CheckViolation => DataError::Constraint(msg),
                    _ => DataError::database(err),
                }
            }
            _ => DataError::database(err),
        }
    }
}

impl From<QueryError> for DataError {
    fn from(err: QueryError) -> Self {
        DataError::Query(err)
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::ForeignKey(msg) => ApiError::UnprocessableReference(msg),
            DataError::Constraint(msg) => ApiError::Constraint(msg),
            DataError::Query(e) => ApiError::Internal(e.to_string()),
            DataError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        DataError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_internal() {
        let err: ApiError = DataError::from(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn pool_errors_are_internal() {
        let err: ApiError = DataError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn foreign_key_maps_to_unprocessable() {
        let err: ApiError = DataError::ForeignKey("FOREIGN KEY constraint failed".into()).into();
        assert!(matches!(err, ApiError::UnprocessableReference(_)));
    }

    #[test]
    fn query_errors_are_internal() {
        let err: ApiError = QueryError::InvalidIdentifier {
            kind: "column",
            ident: "x;".into(),
        }
        .into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
