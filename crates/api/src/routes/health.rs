use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    pub status: &'static str,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
    /// Availability of the external collaborators.
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    /// Whether a Gemini API key is configured.
    pub google_ai: bool,
    /// Whether the database answered the health query.
    pub database: bool,
}

/// GET /api/health -- reports model-key configuration and database
/// reachability.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let google_ai = state.config.gemini.is_configured();
    let database = publixy_db::health_check(&state.pool).await.is_ok();

    let status = if google_ai && database { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now().to_rfc3339(),
        services: ServiceHealth {
            google_ai,
            database,
        },
    })
}

/// Mount health check routes (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
