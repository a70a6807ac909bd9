//! HTTP API layer
//!
//! Exposes the match engine as a small axum service: `POST /solve` plus a
//! `GET /health` readiness probe.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{AppState, HealthResponse, SolveRequest, SolveResponse};

use axum::Router;
use axum::routing::{get, post};

/// Build the application router
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/solve", post(handlers::solve))
        .route("/health", get(handlers::health))
        .with_state(state)
}
