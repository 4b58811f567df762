pub mod race;
pub mod sport;

pub use race::{Race, RaceFilter, RaceStatus, SortOrder};
pub use sport::{Match, MatchFilter, NewMatch};
