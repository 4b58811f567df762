//! Paddock API - Configuration and HTTP/JSON transport
//!
//! - `config`: layered application configuration
//! - `routes`: axum handlers over the racing and sports facades
//! - `server`: state construction, router assembly and the serve loop

pub mod config;
pub mod routes;
pub mod server;

pub use config::AppConfig;
pub use routes::{ApiError, AppState};
pub use server::{build_router, open_state, serve};
