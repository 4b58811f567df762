//! Paddock Core - Domain records, filters and query compilation
//!
//! This crate provides the storage-agnostic pieces shared by the racing and
//! sports services:
//! - Race and Match records plus their list filters
//! - The filter compiler that turns a partially-populated filter into a
//!   parameterized SQL query
//! - The canonical error facility (`ExError`, `ExErrorKind`)
//! - The structured logging facility and its macros

pub mod correlation;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod schema;

// Re-export commonly used types
pub use correlation::RequestId;
pub use errors::{ExError, ExErrorKind, PaddockError, Result};
pub use model::{Match, MatchFilter, NewMatch, Race, RaceFilter, RaceStatus, SortOrder};
pub use query::{CompiledQuery, QueryBuilder, SqlParam};
