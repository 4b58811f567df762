//! Database connection management

use crate::errors::{from_rusqlite, Result};
use paddock_core::SqlParam;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open a SQLite database at the given path, creating parent directories
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            crate::errors::io_error("create_db_dir", e).with_entity_id(parent.display().to_string())
        })?;
    }
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a file-backed connection
///
/// WAL lets the races and matches repositories hold separate connections to
/// the same file without blocking each other's reads.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_secs(5))
        .map_err(from_rusqlite)?;

    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Convert compiled query parameters into owned SQLite values
pub fn bind_values(params: &[SqlParam]) -> Vec<Value> {
    params
        .iter()
        .map(|p| match p {
            SqlParam::Integer(v) => Value::Integer(*v),
            SqlParam::Bool(v) => Value::Integer(i64::from(*v)),
            SqlParam::Text(v) => Value::Text(v.clone()),
        })
        .collect()
}
