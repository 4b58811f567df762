//! SQLite matches repository

use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::Utc;
use paddock_core::query::compile_match_query;
use paddock_core::{log_op_end, log_op_error, log_op_start};
use paddock_core::{Match, MatchFilter, NewMatch, PaddockError};
use rusqlite::{params_from_iter, Connection, OptionalExtension};

use super::mapping::{format_timestamp, MatchRow, MATCH_COLUMNS};
use super::MatchesRepo;
use crate::db::bind_values;
use crate::errors::{from_rusqlite, initialization_error, poisoned, Result};
use crate::schema::create_matches_table;
use crate::seed::matches::insert_matches;
use crate::seed::MatchSeed;

/// Matches repository backed by one exclusively-owned connection
pub struct SqliteMatchesRepo {
    conn: Mutex<Connection>,
    seed: MatchSeed,
    init: OnceLock<Result<()>>,
}

impl SqliteMatchesRepo {
    pub fn new(conn: Connection) -> Self {
        Self::with_seed(conn, MatchSeed::default())
    }

    pub fn with_seed(conn: Connection, seed: MatchSeed) -> Self {
        Self {
            conn: Mutex::new(conn),
            seed,
            init: OnceLock::new(),
        }
    }

    /// Insert a match and return it with its assigned id
    ///
    /// Initializes the repository first, so the table is guaranteed to
    /// exist and the seed rows keep their ids.
    pub fn create_match(&self, new_match: NewMatch) -> Result<Match> {
        self.init()?;

        log_op_start!("matches_create");
        let start = std::time::Instant::now();

        let created = self.create_match_impl(new_match).map_err(|e| {
            log_op_error!(
                "matches_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "matches_create",
            duration_ms = start.elapsed().as_millis() as u64,
            match_id = created.id
        );

        Ok(created)
    }

    fn conn(&self, op: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| poisoned(op))
    }

    fn init_impl(&self) -> Result<usize> {
        let mut conn = self.conn("matches_init")?;
        create_matches_table(&conn)?;

        let matches = self.seed.matches(Utc::now());
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let written = insert_matches(&tx, &matches)?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(written)
    }

    fn create_match_impl(&self, new_match: NewMatch) -> Result<Match> {
        let conn = self.conn("matches_create")?;
        conn.execute(
            "INSERT INTO matches (name, stadium, sport, team1, team2, time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                new_match.name,
                new_match.stadium,
                new_match.sport,
                new_match.team1,
                new_match.team2,
                format_timestamp(&new_match.scheduled_at),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(new_match.with_id(conn.last_insert_rowid()))
    }

    fn list_impl(&self, filter: Option<&MatchFilter>) -> Result<Vec<Match>> {
        let base = format!("SELECT {} FROM matches", MATCH_COLUMNS);
        let query = compile_match_query(&base, filter);
        tracing::debug!(sql = %query.sql, param_count = query.params.len(), "compiled match query");

        let conn = self.conn("matches_list")?;
        let mut stmt = conn.prepare(&query.sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(bind_values(&query.params)), MatchRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(MatchRow::into_match).collect()
    }

    fn get_by_id_impl(&self, id: i64) -> Result<Match> {
        let conn = self.conn("matches_get")?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM matches WHERE id = ?1", MATCH_COLUMNS),
                [id],
                MatchRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or(PaddockError::MatchNotFound { match_id: id })?;

        row.into_match()
    }
}

impl MatchesRepo for SqliteMatchesRepo {
    fn init(&self) -> Result<()> {
        self.init
            .get_or_init(|| {
                log_op_start!("matches_init", seed = %self.seed);
                let start = std::time::Instant::now();

                match self.init_impl() {
                    Ok(written) => {
                        log_op_end!(
                            "matches_init",
                            duration_ms = start.elapsed().as_millis() as u64,
                            row_count = written
                        );
                        Ok(())
                    }
                    Err(cause) => {
                        let err = initialization_error("matches_init", cause);
                        log_op_error!(
                            "matches_init",
                            err.clone(),
                            duration_ms = start.elapsed().as_millis() as u64
                        );
                        Err(err)
                    }
                }
            })
            .clone()
    }

    fn list(&self, filter: Option<MatchFilter>) -> Result<Vec<Match>> {
        log_op_start!("matches_list");
        let start = std::time::Instant::now();

        let matches = self.list_impl(filter.as_ref()).map_err(|e| {
            log_op_error!(
                "matches_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "matches_list",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = matches.len()
        );

        Ok(matches)
    }

    fn get_by_id(&self, id: i64) -> Result<Match> {
        log_op_start!("matches_get", match_id = id);
        let start = std::time::Instant::now();

        let found = self.get_by_id_impl(id).map_err(|e| {
            log_op_error!(
                "matches_get",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                match_id = id
            );
            e
        })?;

        log_op_end!(
            "matches_get",
            duration_ms = start.elapsed().as_millis() as u64,
            match_id = id
        );

        Ok(found)
    }
}
