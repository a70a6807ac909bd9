//! HTTP request handlers
//!
//! One solve endpoint plus a readiness probe. Validation happens once at
//! this boundary via `Query::parse`; the filter receives only well-formed
//! queries.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ApiError;
use crate::core::{Query, Word};
use crate::filter::find_matches;

/// Shared application state: the immutable dictionary
///
/// Built once before the listener binds; concurrent handlers read it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<Vec<Word>>,
}

impl AppState {
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
        }
    }
}

/// Request body for `POST /solve`
///
/// `included` and `excluded` default to empty (no constraint) when absent;
/// a missing `pattern` fails validation the same way an empty one does.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub included: String,
    #[serde(default)]
    pub excluded: String,
}

/// Response body for `POST /solve`
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub count: usize,
    pub words: Vec<String>,
}

/// Response body for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub words: usize,
}

/// `POST /solve` - run one query over the dictionary
///
/// # Errors
/// Returns 400 with `{"error": "..."}` for a malformed pattern or
/// contradictory included/excluded sets.
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let query = Query::parse(&request.pattern, &request.included, &request.excluded)?;

    let result = find_matches(&state.dictionary, &query);
    tracing::info!(%query, count = result.count(), "solved");

    Ok(Json(SolveResponse {
        count: result.count(),
        words: result.texts(),
    }))
}

/// `GET /health` - readiness probe
///
/// The dictionary is loaded before the server starts, so reachable means
/// ready.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        words: state.dictionary.len(),
    })
}
