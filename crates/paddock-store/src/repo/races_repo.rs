//! SQLite races repository
//!
//! Every operation follows the same shape:
//! - `log_op_start!` at entry
//! - the `*_impl` body does the work
//! - `log_op_end!` on success, `log_op_error!` on failure

use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::Utc;
use paddock_core::query::compile_race_query;
use paddock_core::{log_op_end, log_op_error, log_op_start};
use paddock_core::{PaddockError, Race, RaceFilter};
use rusqlite::{params_from_iter, Connection, OptionalExtension};

use super::mapping::{RaceRow, RACE_COLUMNS};
use super::RacesRepo;
use crate::db::bind_values;
use crate::errors::{from_rusqlite, initialization_error, poisoned, Result};
use crate::schema::create_races_table;
use crate::seed::races::insert_races;
use crate::seed::RaceSeed;

/// Races repository backed by one exclusively-owned connection
pub struct SqliteRacesRepo {
    conn: Mutex<Connection>,
    seed: RaceSeed,
    init: OnceLock<Result<()>>,
}

impl SqliteRacesRepo {
    /// Wrap a connection, seeding synthetic races on first `init`
    pub fn new(conn: Connection) -> Self {
        Self::with_seed(conn, RaceSeed::default())
    }

    pub fn with_seed(conn: Connection, seed: RaceSeed) -> Self {
        Self {
            conn: Mutex::new(conn),
            seed,
            init: OnceLock::new(),
        }
    }

    fn conn(&self, op: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| poisoned(op))
    }

    fn init_impl(&self) -> Result<usize> {
        let mut conn = self.conn("races_init")?;
        create_races_table(&conn)?;

        let races = self.seed.races(Utc::now());
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let written = insert_races(&tx, &races)?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(written)
    }

    fn list_impl(&self, filter: &RaceFilter) -> Result<Vec<Race>> {
        let base = format!("SELECT {} FROM races", RACE_COLUMNS);
        let query = compile_race_query(&base, Some(filter));
        tracing::debug!(sql = %query.sql, param_count = query.params.len(), "compiled race query");

        let conn = self.conn("races_list")?;
        let mut stmt = conn.prepare(&query.sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(bind_values(&query.params)), RaceRow::from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(RaceRow::into_race).collect()
    }

    fn get_by_id_impl(&self, id: i64) -> Result<Race> {
        let conn = self.conn("races_get")?;
        let row = conn
            .query_row(
                &format!("SELECT {} FROM races WHERE id = ?1", RACE_COLUMNS),
                [id],
                RaceRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?
            .ok_or(PaddockError::RaceNotFound { race_id: id })?;

        row.into_race()
    }
}

impl RacesRepo for SqliteRacesRepo {
    fn init(&self) -> Result<()> {
        self.init
            .get_or_init(|| {
                log_op_start!("races_init", seed = %self.seed);
                let start = std::time::Instant::now();

                match self.init_impl() {
                    Ok(written) => {
                        log_op_end!(
                            "races_init",
                            duration_ms = start.elapsed().as_millis() as u64,
                            row_count = written
                        );
                        Ok(())
                    }
                    Err(cause) => {
                        let err = initialization_error("races_init", cause);
                        log_op_error!(
                            "races_init",
                            err.clone(),
                            duration_ms = start.elapsed().as_millis() as u64
                        );
                        Err(err)
                    }
                }
            })
            .clone()
    }

    fn list(&self, filter: Option<RaceFilter>) -> Result<Vec<Race>> {
        log_op_start!("races_list");
        let start = std::time::Instant::now();

        let filter = filter.unwrap_or_default();
        let races = self.list_impl(&filter).map_err(|e| {
            log_op_error!(
                "races_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "races_list",
            duration_ms = start.elapsed().as_millis() as u64,
            row_count = races.len()
        );

        Ok(races)
    }

    fn get_by_id(&self, id: i64) -> Result<Race> {
        log_op_start!("races_get", race_id = id);
        let start = std::time::Instant::now();

        let race = self.get_by_id_impl(id).map_err(|e| {
            log_op_error!(
                "races_get",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                race_id = id
            );
            e
        })?;

        log_op_end!(
            "races_get",
            duration_ms = start.elapsed().as_millis() as u64,
            race_id = id
        );

        Ok(race)
    }
}
