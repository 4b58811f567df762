use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::PaddockError;

/// Race - a single race within a meeting
///
/// Races are written once by the seed step and never updated, so `status`
/// reflects the start time relative to the moment the race was seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: i64,

    /// Meeting this race belongs to
    pub meeting_id: i64,

    pub name: String,

    /// Race number within its meeting
    pub number: i64,

    /// Hidden races are excluded from listings unless explicitly requested
    pub visible: bool,

    pub advertised_start_time: DateTime<Utc>,

    pub status: RaceStatus,
}

/// Race status, stored as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RaceStatus {
    Open,
    Closed,
}

impl RaceStatus {
    /// Derive the status of a race starting at `start` as seen at `now`
    ///
    /// A race is open until its advertised start time has passed.
    pub fn at(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if start < now {
            RaceStatus::Closed
        } else {
            RaceStatus::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Open => "OPEN",
            RaceStatus::Closed => "CLOSED",
        }
    }
}

impl FromStr for RaceStatus {
    type Err = PaddockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(RaceStatus::Open),
            "CLOSED" => Ok(RaceStatus::Closed),
            other => Err(PaddockError::InvalidRaceStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for ordering races by advertised start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Criteria narrowing a race listing
///
/// Every field is optional. Leaving `visible` unset does NOT mean "any
/// visibility": listings default to visible races only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceFilter {
    /// Restrict to these meetings; empty means no restriction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meeting_ids: Vec<i64>,

    /// Explicit visibility to match; `None` falls back to visible-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Start-time ordering; `None` falls back to ascending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl RaceFilter {
    pub fn with_meeting_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.meeting_ids = ids.into_iter().collect();
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }
}
