// HTTP route tests driven through the router with `oneshot`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use paddock_api::{build_router, AppState};
use paddock_core::{
    ExError, ExErrorKind, Match, MatchFilter, Race, RaceFilter, RaceStatus,
};
use paddock_service::{RacingService, SportsService};
use paddock_store::{
    db, MatchSeed, MatchesRepo, RaceSeed, RacesRepo, Result, SqliteMatchesRepo, SqliteRacesRepo,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for Router::oneshot

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_900_000_000, 0).unwrap()
}

fn race(id: i64, visible: bool, offset_minutes: i64) -> Race {
    Race {
        id,
        meeting_id: id % 2 + 1,
        name: format!("Race {}", id),
        number: id,
        visible,
        advertised_start_time: start() + Duration::minutes(offset_minutes),
        status: RaceStatus::Open,
    }
}

fn fixture_match(id: i64, stadium: &str) -> Match {
    Match {
        id,
        name: format!("Team {} vs Team {}", id, id + 10),
        stadium: stadium.to_string(),
        sport: "Football".to_string(),
        team1: format!("Team {}", id),
        team2: format!("Team {}", id + 10),
        scheduled_at: start(),
    }
}

fn app() -> Router {
    let races = SqliteRacesRepo::with_seed(
        db::open_in_memory().unwrap(),
        RaceSeed::Fixtures(vec![
            race(1, true, 20),
            race(2, false, 0),
            race(3, true, -10),
        ]),
    );
    races.init().unwrap();

    let matches = SqliteMatchesRepo::with_seed(
        db::open_in_memory().unwrap(),
        MatchSeed::Fixtures(vec![
            fixture_match(1, "Stadium A"),
            fixture_match(2, "Stadium B"),
            fixture_match(3, "Stadium C"),
        ]),
    );
    matches.init().unwrap();

    build_router(Arc::new(AppState {
        racing: RacingService::new(Arc::new(races)),
        sports: SportsService::new(Arc::new(matches)),
    }))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_races_without_filter() {
    let (status, body) = send(app(), post_json("/v1/list-races", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["races"]), vec![3, 1]);
    assert_eq!(body["races"][0]["status"], "OPEN");
}

#[tokio::test]
async fn test_empty_list_body_means_no_filter() {
    let req = Request::builder()
        .method("POST")
        .uri("/v1/list-races")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["races"]), vec![3, 1]);

    let req = Request::builder()
        .method("POST")
        .uri("/v1/list-matches")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    let mut match_ids = ids(&body["matches"]);
    match_ids.sort_unstable();
    assert_eq!(match_ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_races_with_filter() {
    let filter = RaceFilter::default().with_visible(false);
    let (status, body) = send(
        app(),
        post_json("/v1/list-races", json!({ "filter": filter })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["races"]), vec![2]);
}

#[tokio::test]
async fn test_get_race() {
    let (status, body) = send(app(), get("/v1/races/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["race"]["id"], 2);
    assert_eq!(body["race"]["visible"], false);
}

#[tokio::test]
async fn test_get_missing_race_is_404() {
    let (status, body) = send(app(), get("/v1/races/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ERR_NOT_FOUND");
    assert!(body["request_id"].as_str().is_some());
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let (status, body) = send(app(), get("/v1/races/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ERR_INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let req = Request::builder()
        .method("POST")
        .uri("/v1/list-races")
        .header("content-type", "application/json")
        .body(Body::from("{\"filter\": {\"order\": \"sideways\"}}"))
        .unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ERR_INVALID_INPUT");
}

#[tokio::test]
async fn test_list_matches_by_stadium() {
    let filter = MatchFilter::default().with_stadium("Stadium B");
    let (status, body) = send(
        app(),
        post_json("/v1/list-matches", json!({ "filter": filter })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["matches"]), vec![2]);
}

#[tokio::test]
async fn test_get_match() {
    let (status, body) = send(app(), get("/v1/matches/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["match"]["stadium"], "Stadium C");

    let (status, _) = send(app(), get("/v1/matches/30")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// Repository whose one-time initialization failed
struct FailedRepo;

fn init_failure() -> ExError {
    ExError::new(ExErrorKind::Initialization)
        .with_op("races_init")
        .with_message("schema creation or seeding failed")
}

impl RacesRepo for FailedRepo {
    fn init(&self) -> Result<()> {
        Err(init_failure())
    }

    fn list(&self, _filter: Option<RaceFilter>) -> Result<Vec<Race>> {
        Err(init_failure())
    }

    fn get_by_id(&self, _id: i64) -> Result<Race> {
        Err(init_failure())
    }
}

impl MatchesRepo for FailedRepo {
    fn init(&self) -> Result<()> {
        Err(init_failure())
    }

    fn list(&self, _filter: Option<MatchFilter>) -> Result<Vec<Match>> {
        Err(ExError::new(ExErrorKind::Persistence).with_message("disk I/O error"))
    }

    fn get_by_id(&self, _id: i64) -> Result<Match> {
        Err(init_failure())
    }
}

#[tokio::test]
async fn test_error_kinds_map_to_status() {
    let app = build_router(Arc::new(AppState {
        racing: RacingService::new(Arc::new(FailedRepo)),
        sports: SportsService::new(Arc::new(FailedRepo)),
    }));

    let (status, body) = send(app.clone(), get("/v1/races/1")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "ERR_INITIALIZATION");

    let (status, body) = send(app, post_json("/v1/list-matches", json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "ERR_PERSISTENCE");
    assert_eq!(body["message"], "disk I/O error");
}
