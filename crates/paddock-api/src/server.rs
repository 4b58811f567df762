//! State construction and the HTTP serve loop

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use paddock_service::{RacingService, SportsService};
use paddock_store::{
    db, MatchSeed, MatchesRepo, RaceSeed, RacesRepo, Result, SqliteMatchesRepo, SqliteRacesRepo,
};
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};
use crate::routes::{self, AppState};

/// Open both repositories on the configured database and initialize them
///
/// Each repository gets its own connection to the same file. Initialization
/// failures are fatal here; nothing is served from a half-seeded store.
pub fn open_state(config: &AppConfig) -> Result<AppState> {
    let races = SqliteRacesRepo::with_seed(
        db::open(&config.database.path)?,
        RaceSeed::Synthetic {
            count: config.seed.race_count,
        },
    );
    races.init()?;

    let matches = SqliteMatchesRepo::with_seed(
        db::open(&config.database.path)?,
        MatchSeed::Synthetic {
            count: config.seed.match_count,
        },
    );
    matches.init()?;

    Ok(AppState {
        racing: RacingService::new(Arc::new(races)),
        sports: SportsService::new(Arc::new(matches)),
    })
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/v1/list-races", post(routes::list_races))
        .route("/v1/races/:id", get(routes::get_race))
        .route("/v1/list-matches", post(routes::list_matches))
        .route("/v1/matches/:id", get(routes::get_match))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let ip = config.host.parse().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid server.host {:?}: {}", config.host, e),
        )
    })?;
    let addr = SocketAddr::new(ip, config.port);

    let app = build_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "Ctrl-C handler unavailable, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
