//! Request and response envelopes

use paddock_core::{Match, MatchFilter, Race, RaceFilter};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Racing
// ---------------------------------------------------------------------------

/// List races, optionally narrowed by a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<RaceFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceRequest {
    pub race_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRaceResponse {
    pub race: Race,
}

// ---------------------------------------------------------------------------
// Sports
// ---------------------------------------------------------------------------

/// List matches, optionally narrowed by a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMatchesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<MatchFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMatchesResponse {
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMatchRequest {
    pub match_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMatchResponse {
    pub r#match: Match,
}
