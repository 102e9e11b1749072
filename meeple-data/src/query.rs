use crate::error::DataError;
use crate::sort::SortOrder;

use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::FromRow;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl BindValue {
    pub fn text(value: impl Into<String>) -> Self {
        BindValue::Text(value.into())
    }
}

/// Finished statement text plus its ordered bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl BuiltQuery {
    fn query_as<'q, O>(
        &'q self,
    ) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>>
    where
        O: for<'r> FromRow<'r, SqliteRow>,
    {
        let mut query = sqlx::query_as::<_, O>(&self.sql);
        for param in &self.params {
            query = match param {
                BindValue::Text(s) => query.bind(s.as_str()),
                BindValue::Int(i) => query.bind(*i),
            };
        }
        query
    }

    pub async fn fetch_all<O>(&self, pool: &SqlitePool) -> Result<Vec<O>, DataError>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %self.sql, params = self.params.len(), "executing query");
        Ok(self.query_as::<O>().fetch_all(pool).await?)
    }

    pub async fn fetch_optional<O>(&self, pool: &SqlitePool) -> Result<Option<O>, DataError>
    where
        O: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %self.sql, params = self.params.len(), "executing query");
        Ok(self.query_as::<O>().fetch_optional(pool).await?)
    }
}

/// A fluent builder for parameterized SELECT statements.
///
/// Identifiers (tables, columns, join conditions, sort keys) are
/// `&'static str`, so only text written in this codebase can be spliced into
/// the statement. Every value is carried as a [`BindValue`] and emitted as a
/// placeholder.
///
/// # Example
///
/// ```ignore
/// let q = SelectBuilder::new("reviews")
///     .column("reviews.*")
///     .where_eq("reviews.category", BindValue::text("dexterity"))
///     .order_by("reviews.votes", SortOrder::Desc)
///     .limit(10)
///     .offset(0)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    joins: Vec<(&'static str, &'static str)>,
    conditions: Vec<(&'static str, BindValue)>,
    group_by: Option<&'static str>,
    order: Vec<(&'static str, SortOrder)>,
    limit_val: Option<u64>,
    offset_val: Option<u64>,
}

impl SelectBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: None,
            order: Vec::new(),
            limit_val: None,
            offset_val: None,
        }
    }

    /// Add a select-list item. Any expression is allowed here.
    pub fn column(mut self, expr: &'static str) -> Self {
        self.columns.push(expr);
        self
    }

    pub fn left_join(mut self, table: &'static str, on: &'static str) -> Self {
        self.joins.push((table, on));
        self
    }

    pub fn where_eq(mut self, column: &'static str, value: BindValue) -> Self {
        self.conditions.push((column, value));
        self
    }

    pub fn group_by(mut self, column: &'static str) -> Self {
        self.group_by = Some(column);
        self
    }

    pub fn order_by(mut self, column: &'static str, order: SortOrder) -> Self {
        self.order.push((column, order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit_val = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset_val = Some(offset);
        self
    }

    /// Build the statement, checking every identifier that is not a select-list
    /// expression or join condition.
    pub fn build(&self) -> Result<BuiltQuery, QueryError> {
        check_identifier(self.table, "table")?;
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut sql = format!("SELECT {columns} FROM {}", self.table);
        let mut params = Vec::new();

        for (table, on) in &self.joins {
            check_identifier(table, "table")?;
            sql.push_str(&format!(" LEFT JOIN {table} ON {on}"));
        }
        self.append_where(&mut sql, &mut params)?;
        if let Some(group) = self.group_by {
            check_identifier(group, "column")?;
            sql.push_str(&format!(" GROUP BY {group}"));
        }
        self.append_order(&mut sql)?;
        self.append_limit_offset(&mut sql, &mut params);
        Ok(BuiltQuery { sql, params })
    }

    /// Build a COUNT query over the same table, joins and conditions.
    pub fn build_count(&self, distinct: &'static str) -> Result<BuiltQuery, QueryError> {
        check_identifier(self.table, "table")?;
        check_identifier(distinct, "column")?;
        let mut sql = format!("SELECT COUNT(DISTINCT {distinct}) AS total_count FROM {}", self.table);
        let mut params = Vec::new();
        for (table, on) in &self.joins {
            check_identifier(table, "table")?;
            sql.push_str(&format!(" LEFT JOIN {table} ON {on}"));
        }
        self.append_where(&mut sql, &mut params)?;
        Ok(BuiltQuery { sql, params })
    }

    fn append_where(&self, sql: &mut String, params: &mut Vec<BindValue>) -> Result<(), QueryError> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.conditions.len());
        for (col, val) in &self.conditions {
            check_identifier(col, "column")?;
            clauses.push(format!("{col} = ?"));
            params.push(val.clone());
        }
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
        Ok(())
    }

    fn append_order(&self, sql: &mut String) -> Result<(), QueryError> {
        if self.order.is_empty() {
            return Ok(());
        }
        let mut clauses = Vec::with_capacity(self.order.len());
        for (col, order) in &self.order {
            check_identifier(col, "column")?;
            clauses.push(format!("{col} {}", order.keyword()));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&clauses.join(", "));
        Ok(())
    }

    fn append_limit_offset(&self, sql: &mut String, params: &mut Vec<BindValue>) {
        if let Some(limit) = self.limit_val {
            sql.push_str(" LIMIT ?");
            params.push(BindValue::Int(limit as i64));
        }
        if let Some(offset) = self.offset_val {
            sql.push_str(" OFFSET ?");
            params.push(BindValue::Int(offset as i64));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    InvalidIdentifier { kind: &'static str, ident: String },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

fn check_identifier(ident: &str, kind: &'static str) -> Result<(), QueryError> {
    if is_valid_identifier(ident) {
        Ok(())
    } else {
        Err(QueryError::InvalidIdentifier {
            kind,
            ident: ident.to_string(),
        })
    }
}

fn is_valid_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.split('.').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
