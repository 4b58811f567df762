//! One-time data seeding
//!
//! Provides:
//! - Seed plans (`RaceSeed`, `MatchSeed`): synthetic data or explicit fixtures
//! - Synthetic generators with randomized attributes
//! - `INSERT OR IGNORE` writers so reseeding a persisted store is harmless

mod names;
pub mod matches;
pub mod races;

pub use matches::{synthetic_matches, MatchSeed, DEFAULT_MATCH_COUNT};
pub use races::{synthetic_races, RaceSeed, DEFAULT_RACE_COUNT};
