//! API route handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paddock_core::{ExError, ExErrorKind, RequestId};
use paddock_service::{
    GetMatchRequest, GetMatchResponse, GetRaceRequest, GetRaceResponse, ListMatchesRequest,
    ListMatchesResponse, ListRacesRequest, ListRacesResponse, RacingService, SportsService,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::Span;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub racing: RacingService,
    pub sports: SportsService,
}

/// Error type for API handlers.
///
/// Wraps the structured error that caused the failure, tagged with the
/// request it belongs to.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: ExError,
}

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub request_id: Option<RequestId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl ApiError {
    pub fn new(error: ExError, request_id: &RequestId) -> Self {
        Self {
            status: status_for(error.kind()),
            error: error.with_request_id(request_id.clone()),
        }
    }

    pub fn invalid_input(message: impl Into<String>, request_id: &RequestId) -> Self {
        Self::new(
            ExError::new(ExErrorKind::InvalidInput).with_message(message),
            request_id,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &ExError {
        &self.error
    }
}

/// HTTP status for each error kind
pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::NotFound => StatusCode::NOT_FOUND,
        ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ExErrorKind::Initialization => StatusCode::SERVICE_UNAVAILABLE,
        ExErrorKind::Mapping | ExErrorKind::Persistence | ExErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(err_code = self.error.code(), error = %self.error, "request failed");
        } else {
            tracing::debug!(err_code = self.error.code(), error = %self.error, "request rejected");
        }

        let message = if self.error.message().is_empty() {
            self.error.to_string()
        } else {
            self.error.message().to_string()
        };

        let body = Json(ErrorBody {
            code: self.error.code().to_string(),
            message,
            request_id: self.error.request_id().cloned(),
        });
        (self.status, body).into_response()
    }
}

/// Decode a list request body; an empty body means "no filter"
fn parse_list_body<T>(body: &Bytes, request_id: &RequestId) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    Json::<T>::from_bytes(body)
        .map(|Json(request)| request)
        .map_err(|e| ApiError::invalid_input(e.body_text(), request_id))
}

/// Run a synchronous facade call on the blocking pool, inside `span`
async fn run_blocking<T, F>(request_id: RequestId, span: Span, op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> paddock_store::Result<T> + Send + 'static,
{
    let joined = tokio::task::spawn_blocking(move || span.in_scope(op)).await;

    match joined {
        Ok(result) => result.map_err(|e| ApiError::new(e, &request_id)),
        Err(join_err) => Err(ApiError::new(
            ExError::new(ExErrorKind::Internal)
                .with_op("spawn_blocking")
                .with_message(join_err.to_string()),
            &request_id,
        )),
    }
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /v1/list-races`
pub async fn list_races(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ListRacesResponse>, ApiError> {
    let request_id = RequestId::new();
    let request: ListRacesRequest = parse_list_body(&body, &request_id)?;

    let span = tracing::info_span!("list_races", request_id = %request_id);
    let racing = state.racing.clone();
    run_blocking(request_id, span, move || racing.list_races(request))
        .await
        .map(Json)
}

/// `GET /v1/races/:id`
pub async fn get_race(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GetRaceResponse>, ApiError> {
    let request_id = RequestId::new();
    let Path(race_id) = id.map_err(|e| ApiError::invalid_input(e.body_text(), &request_id))?;

    let span = tracing::info_span!("get_race", request_id = %request_id, race_id);
    let racing = state.racing.clone();
    run_blocking(request_id, span, move || {
        racing.get_race(GetRaceRequest { race_id })
    })
    .await
    .map(Json)
}

/// `POST /v1/list-matches`
pub async fn list_matches(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ListMatchesResponse>, ApiError> {
    let request_id = RequestId::new();
    let request: ListMatchesRequest = parse_list_body(&body, &request_id)?;

    let span = tracing::info_span!("list_matches", request_id = %request_id);
    let sports = state.sports.clone();
    run_blocking(request_id, span, move || sports.list_matches(request))
        .await
        .map(Json)
}

/// `GET /v1/matches/:id`
pub async fn get_match(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GetMatchResponse>, ApiError> {
    let request_id = RequestId::new();
    let Path(match_id) = id.map_err(|e| ApiError::invalid_input(e.body_text(), &request_id))?;

    let span = tracing::info_span!("get_match", request_id = %request_id, match_id);
    let sports = state.sports.clone();
    run_blocking(request_id, span, move || {
        sports.get_match(GetMatchRequest { match_id })
    })
    .await
    .map(Json)
}
