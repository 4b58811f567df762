//! Error handling for paddock-store
//!
//! Wraps the core `ExError` with store-specific helpers

use paddock_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
///
/// Conversion failures on a row that was found are classified as mapping
/// errors, and an empty single-row result as not-found, so callers never see
/// either of those as a plain storage failure.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::QueryReturnedNoRows => ExErrorKind::NotFound,
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => ExErrorKind::Mapping,
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Wrap the failure of a first-time schema/seed attempt
pub fn initialization_error(op: &str, cause: ExError) -> ExError {
    ExError::new(ExErrorKind::Initialization)
        .with_op(op.to_string())
        .with_message("schema creation or seeding failed")
        .with_source(cause)
}

/// A connection mutex was poisoned by a panicking holder
pub fn poisoned(op: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op.to_string())
        .with_message("connection lock poisoned")
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
