use super::{CompiledQuery, SqlParam};

/// Accumulates WHERE clauses and their parameters side by side
///
/// Every clause is pushed together with exactly the parameters its
/// placeholders consume, so rendering clauses in push order yields params in
/// placeholder order.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base: String,
    clauses: Vec<String>,
    params: Vec<SqlParam>,
    order_by: Option<String>,
}

impl QueryBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            clauses: Vec::new(),
            params: Vec::new(),
            order_by: None,
        }
    }

    /// `column = ?`
    pub fn push_eq(&mut self, column: &str, value: impl Into<SqlParam>) -> &mut Self {
        self.clauses.push(format!("{} = ?", column));
        self.params.push(value.into());
        self
    }

    /// `column IN (?, ?, ...)`, one placeholder per value
    ///
    /// An empty value list adds nothing: `IN ()` is not valid SQL and an
    /// empty set is treated as "no restriction".
    pub fn push_in<I, V>(&mut self, column: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlParam>,
    {
        let values: Vec<SqlParam> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return self;
        }

        let placeholders = vec!["?"; values.len()].join(", ");
        self.clauses.push(format!("{} IN ({})", column, placeholders));
        self.params.extend(values);
        self
    }

    /// `ORDER BY column <direction>`, replacing any earlier ordering
    pub fn order_by(&mut self, column: &str, direction: &str) -> &mut Self {
        self.order_by = Some(format!("{} {}", column, direction));
        self
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn build(self) -> CompiledQuery {
        let mut sql = self.base;

        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }

        if let Some(order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }

        CompiledQuery {
            sql,
            params: self.params,
        }
    }
}
