//! Paddock Service - Request/response facade over the repositories
//!
//! Provides:
//! - Serde request and response envelopes for every operation
//! - `RacingService` (list and get races)
//! - `SportsService` (list and get matches)
//!
//! The facades add no validation of their own. Repository errors reach the
//! caller unchanged so the transport can map them to status codes.

pub mod messages;
pub mod racing;
pub mod sports;

pub use messages::{
    GetMatchRequest, GetMatchResponse, GetRaceRequest, GetRaceResponse, ListMatchesRequest,
    ListMatchesResponse, ListRacesRequest, ListRacesResponse,
};
pub use racing::RacingService;
pub use sports::SportsService;
