//! Repository layer over SQLite
//!
//! The traits are the seam the service facade depends on; the SQLite
//! implementations own their connection exclusively.

pub mod mapping;
pub mod matches_repo;
pub mod races_repo;

pub use matches_repo::SqliteMatchesRepo;
pub use races_repo::SqliteRacesRepo;

use crate::errors::Result;
use paddock_core::{Match, MatchFilter, Race, RaceFilter};

/// Read access to races
pub trait RacesRepo: Send + Sync {
    /// Create the schema and seed races, once per repository instance
    ///
    /// Later calls return the outcome of the first call without running
    /// again, including its error.
    fn init(&self) -> Result<()>;

    /// List races matching `filter`
    ///
    /// With no filter, visible races only, ascending by start time. An empty
    /// result is `Ok(vec![])`, never `NotFound`.
    fn list(&self, filter: Option<RaceFilter>) -> Result<Vec<Race>>;

    /// Fetch one race; `NotFound` when no row has this id
    fn get_by_id(&self, id: i64) -> Result<Race>;
}

/// Read access to sports matches
pub trait MatchesRepo: Send + Sync {
    /// Create the schema and seed matches, once per repository instance
    fn init(&self) -> Result<()>;

    /// List matches satisfying every set field of `filter`
    fn list(&self, filter: Option<MatchFilter>) -> Result<Vec<Match>>;

    /// Fetch one match; `NotFound` when no row has this id
    fn get_by_id(&self, id: i64) -> Result<Match>;
}
