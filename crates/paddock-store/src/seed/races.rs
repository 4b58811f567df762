//! Race seeding

use chrono::{DateTime, Duration, Utc};
use paddock_core::{Race, RaceStatus};
use rand::Rng;
use rusqlite::Transaction;

use super::names;
use crate::errors::{from_rusqlite, Result};
use crate::repo::mapping::format_timestamp;

/// Number of races generated when no count is configured
pub const DEFAULT_RACE_COUNT: u32 = 100;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Window around "now" that synthetic start times fall in, in seconds
const START_WINDOW_BEFORE: i64 = SECONDS_PER_DAY;
const START_WINDOW_AFTER: i64 = 2 * SECONDS_PER_DAY;

/// What a races repository writes on first initialization
#[derive(Debug, Clone, PartialEq)]
pub enum RaceSeed {
    /// Generate `count` races with ids `1..=count`
    Synthetic { count: u32 },
    /// Write exactly these races
    Fixtures(Vec<Race>),
}

impl Default for RaceSeed {
    fn default() -> Self {
        RaceSeed::Synthetic {
            count: DEFAULT_RACE_COUNT,
        }
    }
}

impl std::fmt::Display for RaceSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaceSeed::Synthetic { count } => write!(f, "synthetic({})", count),
            RaceSeed::Fixtures(races) => write!(f, "fixtures({})", races.len()),
        }
    }
}

impl RaceSeed {
    /// Materialize the races to write, as of `now`
    pub fn races(&self, now: DateTime<Utc>) -> Vec<Race> {
        match self {
            RaceSeed::Synthetic { count } => synthetic_races(*count, now, &mut rand::rng()),
            RaceSeed::Fixtures(races) => races.clone(),
        }
    }
}

/// Generate `count` races with randomized attributes
///
/// Start times fall between one day before and two days after `now`, at
/// whole seconds. Status is fixed here, once: OPEN when the start is still
/// ahead of `now`, CLOSED otherwise.
pub fn synthetic_races<R: Rng>(count: u32, now: DateTime<Utc>, rng: &mut R) -> Vec<Race> {
    let now = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);

    (1..=i64::from(count))
        .map(|id| {
            let offset = rng.random_range(-START_WINDOW_BEFORE..=START_WINDOW_AFTER);
            let advertised_start_time = now + Duration::seconds(offset);

            Race {
                id,
                meeting_id: rng.random_range(1..=10),
                name: names::team_name(rng),
                number: rng.random_range(1..=12),
                visible: rng.random_bool(0.5),
                advertised_start_time,
                status: RaceStatus::at(advertised_start_time, now),
            }
        })
        .collect()
}

/// Insert races, ignoring ids that already exist
///
/// Returns the number of rows actually written.
pub fn insert_races(tx: &Transaction<'_>, races: &[Race]) -> Result<usize> {
    let mut stmt = tx
        .prepare_cached(
            "INSERT OR IGNORE INTO races
             (id, meeting_id, name, number, visible, advertised_start_time, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(from_rusqlite)?;

    let mut written = 0;
    for race in races {
        written += stmt
            .execute(rusqlite::params![
                race.id,
                race.meeting_id,
                race.name,
                race.number,
                race.visible,
                format_timestamp(&race.advertised_start_time),
                race.status.as_str(),
            ])
            .map_err(from_rusqlite)?;
    }

    Ok(written)
}
