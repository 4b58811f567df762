//! SQLite schema for races and matches
//!
//! Tables:
//! - races: race records, keyed by a caller-supplied id
//! - matches: sports matches, keyed by an auto-incrementing id

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Create the races table if it does not exist
pub fn create_races_table(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS races (
            id INTEGER PRIMARY KEY,
            meeting_id INTEGER,
            name TEXT,
            number INTEGER,
            visible INTEGER,
            advertised_start_time DATETIME,
            status TEXT
        )
        "#,
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Create the matches table if it does not exist
pub fn create_matches_table(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            stadium TEXT,
            sport TEXT,
            team1 TEXT,
            team2 TEXT,
            time TIMESTAMP
        )
        "#,
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('races', 'matches')",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_create_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_races_table(&conn).unwrap();
        create_matches_table(&conn).unwrap();
        assert_eq!(table_count(&conn), 2);
    }

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_races_table(&conn).unwrap();
        create_matches_table(&conn).unwrap();
        // Should not fail on second call
        create_races_table(&conn).unwrap();
        create_matches_table(&conn).unwrap();
        assert_eq!(table_count(&conn), 2);
    }
}
