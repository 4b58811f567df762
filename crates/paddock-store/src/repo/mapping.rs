//! Row mapper: stored rows to domain records
//!
//! Mapping happens in two steps. `from_row` scans the columns exactly as
//! stored; `into_race` / `into_match` then converts them into the canonical
//! record, failing with a mapping error when a timestamp or status cannot be
//! interpreted.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use paddock_core::errors::{PaddockError, Result};
use paddock_core::{Match, Race, RaceStatus};
use rusqlite::Row;

/// Columns selected for a race, in `RaceRow::from_row` order
pub const RACE_COLUMNS: &str =
    "id, meeting_id, name, number, visible, advertised_start_time, status";

/// Columns selected for a match, in `MatchRow::from_row` order
pub const MATCH_COLUMNS: &str = "id, name, stadium, sport, team1, team2, time";

/// A race row as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceRow {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: String,
    pub status: String,
}

impl RaceRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            meeting_id: row.get(1)?,
            name: row.get(2)?,
            number: row.get(3)?,
            visible: row.get(4)?,
            advertised_start_time: row.get(5)?,
            status: row.get(6)?,
        })
    }

    pub fn into_race(self) -> Result<Race> {
        let advertised_start_time =
            parse_timestamp("advertised_start_time", &self.advertised_start_time)?;
        let status: RaceStatus = self.status.parse()?;

        Ok(Race {
            id: self.id,
            meeting_id: self.meeting_id,
            name: self.name,
            number: self.number,
            visible: self.visible,
            advertised_start_time,
            status,
        })
    }
}

/// A match row as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub id: i64,
    pub name: String,
    pub stadium: String,
    pub sport: String,
    pub team1: String,
    pub team2: String,
    pub time: String,
}

impl MatchRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            stadium: row.get(2)?,
            sport: row.get(3)?,
            team1: row.get(4)?,
            team2: row.get(5)?,
            time: row.get(6)?,
        })
    }

    pub fn into_match(self) -> Result<Match> {
        let scheduled_at = parse_timestamp("time", &self.time)?;

        Ok(Match {
            id: self.id,
            name: self.name,
            stadium: self.stadium,
            sport: self.sport,
            team1: self.team1,
            team2: self.team2,
            scheduled_at,
        })
    }
}

/// Render a timestamp the way it is stored
///
/// Always UTC with a `Z` suffix. Sub-second precision is kept, so a record
/// reads back exactly as it was written.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a stored timestamp
///
/// Accepts RFC 3339 plus SQLite's `YYYY-MM-DD HH:MM:SS[.fff][+HH:MM]` forms;
/// values without an offset are taken as UTC.
pub fn parse_timestamp(column: &str, raw: &str) -> std::result::Result<DateTime<Utc>, PaddockError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    Err(PaddockError::InvalidTimestamp {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_core::ExErrorKind;

    fn race_row() -> RaceRow {
        RaceRow {
            id: 1,
            meeting_id: 3,
            name: "Ohio Wolves".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: "2024-03-01T10:30:00Z".to_string(),
            status: "OPEN".to_string(),
        }
    }

    #[test]
    fn test_race_row_maps_to_record() {
        let race = race_row().into_race().unwrap();
        assert_eq!(race.id, 1);
        assert_eq!(race.status, RaceStatus::Open);
        assert_eq!(
            race.advertised_start_time,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_malformed_timestamp_is_mapping_error() {
        let mut row = race_row();
        row.advertised_start_time = "not a time".to_string();
        let err = row.into_race().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Mapping);
        assert!(err.message().contains("not a time"));
    }

    #[test]
    fn test_unknown_status_is_mapping_error() {
        let mut row = race_row();
        row.status = "ABANDONED".to_string();
        assert_eq!(row.into_race().unwrap_err().kind(), ExErrorKind::Mapping);
    }

    #[test]
    fn test_sqlite_native_formats_accepted() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("t", "2024-03-01 10:30:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("t", "2024-03-01 20:30:00+10:00").unwrap(),
            expected
        );
        assert_eq!(
            parse_timestamp("t", "2024-03-01 10:30:00.000").unwrap(),
            expected
        );
    }

    #[test]
    fn test_fractional_seconds_survive_formatting() {
        let ts = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let stored = format_timestamp(&ts);
        assert_eq!(stored, "2030-01-01T00:00:00.750Z");
        assert_eq!(parse_timestamp("time", &stored).unwrap(), ts);
    }

    #[test]
    fn test_offsets_normalised_to_utc() {
        let ts = parse_timestamp("t", "2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T10:30:00Z");
    }
}
