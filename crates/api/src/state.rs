use std::sync::Arc;

use publixy_gemini::TextModel;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: publixy_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted text model used by all generation handlers.
    pub model: Arc<dyn TextModel>,
}
