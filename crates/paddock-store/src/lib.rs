//! Paddock Store - SQLite persistence for races and matches
//!
//! Provides:
//! - Connection helpers and idempotent schema creation
//! - The row mapper turning stored rows into domain records
//! - `RacesRepo` / `MatchesRepo` traits with SQLite implementations
//! - One-time seeding with synthetic or fixture data

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::{MatchesRepo, RacesRepo, SqliteMatchesRepo, SqliteRacesRepo};
pub use seed::{MatchSeed, RaceSeed};
