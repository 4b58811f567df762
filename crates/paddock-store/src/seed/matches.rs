//! Match seeding

use chrono::{DateTime, Duration, Utc};
use paddock_core::Match;
use rand::Rng;
use rusqlite::Transaction;

use super::names;
use crate::errors::{from_rusqlite, Result};
use crate::repo::mapping::format_timestamp;

/// Number of matches generated when no count is configured
pub const DEFAULT_MATCH_COUNT: u32 = 30;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SCHEDULE_WINDOW_BEFORE: i64 = SECONDS_PER_DAY;
const SCHEDULE_WINDOW_AFTER: i64 = 7 * SECONDS_PER_DAY;

/// What a matches repository writes on first initialization
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSeed {
    /// Generate `count` matches with ids `1..=count`
    Synthetic { count: u32 },
    /// Write exactly these matches
    Fixtures(Vec<Match>),
}

impl Default for MatchSeed {
    fn default() -> Self {
        MatchSeed::Synthetic {
            count: DEFAULT_MATCH_COUNT,
        }
    }
}

impl std::fmt::Display for MatchSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSeed::Synthetic { count } => write!(f, "synthetic({})", count),
            MatchSeed::Fixtures(matches) => write!(f, "fixtures({})", matches.len()),
        }
    }
}

impl MatchSeed {
    pub fn matches(&self, now: DateTime<Utc>) -> Vec<Match> {
        match self {
            MatchSeed::Synthetic { count } => synthetic_matches(*count, now, &mut rand::rng()),
            MatchSeed::Fixtures(matches) => matches.clone(),
        }
    }
}

/// Generate `count` matches between distinct synthetic teams
pub fn synthetic_matches<R: Rng>(
    count: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Match> {
    let now = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);

    (1..=i64::from(count))
        .map(|id| {
            let offset = rng.random_range(-SCHEDULE_WINDOW_BEFORE..=SCHEDULE_WINDOW_AFTER);
            let team1 = names::team_name(rng);
            let mut team2 = names::team_name(rng);
            while team2 == team1 {
                team2 = names::team_name(rng);
            }

            Match {
                id,
                name: format!("{} vs {}", team1, team2),
                stadium: names::stadium(rng),
                sport: names::sport(rng),
                team1,
                team2,
                scheduled_at: now + Duration::seconds(offset),
            }
        })
        .collect()
}

/// Insert matches with their ids, ignoring ids that already exist
pub fn insert_matches(tx: &Transaction<'_>, matches: &[Match]) -> Result<usize> {
    let mut stmt = tx
        .prepare_cached(
            "INSERT OR IGNORE INTO matches
             (id, name, stadium, sport, team1, team2, time)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(from_rusqlite)?;

    let mut written = 0;
    for m in matches {
        written += stmt
            .execute(rusqlite::params![
                m.id,
                m.name,
                m.stadium,
                m.sport,
                m.team1,
                m.team2,
                format_timestamp(&m.scheduled_at),
            ])
            .map_err(from_rusqlite)?;
    }

    Ok(written)
}
