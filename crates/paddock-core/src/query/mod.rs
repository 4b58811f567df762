//! Filter-to-query compilation
//!
//! Turns an optional, partially-populated filter into a final SQL string and
//! the ordered list of values bound to its positional `?` placeholders.
//!
//! - [`QueryBuilder`] accumulates `(clause, params)` pairs in lock-step
//! - [`compile_race_query`] applies the race listing policy (visible-only and
//!   ascending start time unless told otherwise)
//! - [`compile_match_query`] applies independent equality constraints

mod builder;
mod matches;
mod races;

pub use builder::QueryBuilder;
pub use matches::compile_match_query;
pub use races::compile_race_query;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Integer(i64),
    Bool(bool),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Integer(v)
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        SqlParam::Bool(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

/// Final query text plus its bound parameters, in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl CompiledQuery {
    /// A query with no parameters
    pub fn bare(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}
