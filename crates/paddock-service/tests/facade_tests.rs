// Facade tests against mocked repositories
// The facades must forward filters untouched and pass errors through as-is

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockall::mock;
use mockall::predicate::eq;
use paddock_core::{
    ExError, ExErrorKind, Match, MatchFilter, PaddockError, Race, RaceFilter, RaceStatus,
    SortOrder,
};
use paddock_service::{
    GetMatchRequest, GetRaceRequest, ListMatchesRequest, ListRacesRequest, RacingService,
    SportsService,
};
use paddock_store::{MatchesRepo, RacesRepo, Result};

mock! {
    pub Races {}

    impl RacesRepo for Races {
        fn init(&self) -> Result<()>;
        fn list(&self, filter: Option<RaceFilter>) -> Result<Vec<Race>>;
        fn get_by_id(&self, id: i64) -> Result<Race>;
    }
}

mock! {
    pub Matches {}

    impl MatchesRepo for Matches {
        fn init(&self) -> Result<()>;
        fn list(&self, filter: Option<MatchFilter>) -> Result<Vec<Match>>;
        fn get_by_id(&self, id: i64) -> Result<Match>;
    }
}

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_900_000_000, 0).unwrap()
}

fn race(id: i64) -> Race {
    Race {
        id,
        meeting_id: 2,
        name: "Nevada comets".to_string(),
        number: 5,
        visible: true,
        advertised_start_time: start(),
        status: RaceStatus::Open,
    }
}

fn sample_match(id: i64) -> Match {
    Match {
        id,
        name: "Reds vs Blues".to_string(),
        stadium: "Stadium B".to_string(),
        sport: "Football".to_string(),
        team1: "Reds".to_string(),
        team2: "Blues".to_string(),
        scheduled_at: start(),
    }
}

#[test]
fn test_list_races_forwards_absent_filter() {
    let mut repo = MockRaces::new();
    repo.expect_list()
        .withf(|filter| filter.is_none())
        .times(1)
        .returning(|_| Ok(vec![race(1), race(2)]));

    let service = RacingService::new(Arc::new(repo));
    let response = service.list_races(ListRacesRequest::default()).unwrap();

    assert_eq!(response.races, vec![race(1), race(2)]);
}

#[test]
fn test_list_races_forwards_filter_unchanged() {
    let filter = RaceFilter::default()
        .with_meeting_ids([4, 8])
        .with_order(SortOrder::Descending);

    let mut repo = MockRaces::new();
    repo.expect_list()
        .with(eq(Some(filter.clone())))
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let service = RacingService::new(Arc::new(repo));
    let response = service
        .list_races(ListRacesRequest {
            filter: Some(filter),
        })
        .unwrap();

    assert!(response.races.is_empty());
}

#[test]
fn test_get_race_wraps_record() {
    let mut repo = MockRaces::new();
    repo.expect_get_by_id()
        .with(eq(9))
        .times(1)
        .returning(|id| Ok(race(id)));

    let service = RacingService::new(Arc::new(repo));
    let response = service.get_race(GetRaceRequest { race_id: 9 }).unwrap();

    assert_eq!(response.race.id, 9);
}

#[test]
fn test_get_race_passes_not_found_through() {
    let mut repo = MockRaces::new();
    repo.expect_get_by_id()
        .returning(|id| Err(PaddockError::RaceNotFound { race_id: id }.into()));

    let service = RacingService::new(Arc::new(repo));
    let err = service.get_race(GetRaceRequest { race_id: 999 }).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("999"));
}

#[test]
fn test_list_races_passes_storage_error_through() {
    let mut repo = MockRaces::new();
    repo.expect_list().returning(|_| {
        Err(ExError::new(ExErrorKind::Persistence).with_message("database is locked"))
    });

    let service = RacingService::new(Arc::new(repo));
    let err = service.list_races(ListRacesRequest::default()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.message(), "database is locked");
}

#[test]
fn test_list_matches_forwards_filter() {
    let filter = MatchFilter::default().with_stadium("Stadium B");

    let mut repo = MockMatches::new();
    repo.expect_list()
        .with(eq(Some(filter.clone())))
        .times(1)
        .returning(|_| Ok(vec![sample_match(2)]));

    let service = SportsService::new(Arc::new(repo));
    let response = service
        .list_matches(ListMatchesRequest {
            filter: Some(filter),
        })
        .unwrap();

    assert_eq!(response.matches, vec![sample_match(2)]);
}

#[test]
fn test_get_match_wraps_record() {
    let mut repo = MockMatches::new();
    repo.expect_get_by_id()
        .with(eq(2))
        .returning(|id| Ok(sample_match(id)));

    let service = SportsService::new(Arc::new(repo));
    let response = service.get_match(GetMatchRequest { match_id: 2 }).unwrap();

    assert_eq!(response.r#match, sample_match(2));
}

#[test]
fn test_get_match_passes_mapping_error_through() {
    let mut repo = MockMatches::new();
    repo.expect_get_by_id().returning(|_| {
        Err(PaddockError::InvalidTimestamp {
            column: "time".to_string(),
            value: "soon".to_string(),
        }
        .into())
    });

    let service = SportsService::new(Arc::new(repo));
    let err = service.get_match(GetMatchRequest { match_id: 1 }).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Mapping);
}
