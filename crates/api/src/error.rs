use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use publixy_core::error::CoreError;
use publixy_gemini::GeminiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain and gateway errors and implements [`IntoResponse`] to
/// produce the `{ "success": false, "error": ..., "details": ... }`
/// failure envelope the browser client expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `publixy-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The model call failed: transport error, non-2xx, or empty reply.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GeminiError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "Requisição inválida",
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Erro interno do servidor",
                        "internal error".to_string(),
                    )
                }
            },

            AppError::Gateway(err) => {
                tracing::error!(error = %err, "Model call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Erro ao comunicar com o serviço de IA",
                    err.to_string(),
                )
            }

            // Sink writes are best-effort inside handlers, so a database
            // error reaching here is unexpected; sanitize the details.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor",
                    "database error".to_string(),
                )
            }

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Requisição inválida",
                msg.clone(),
            ),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor",
                    "internal error".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": error,
            "details": details,
        });

        (status, axum::Json(body)).into_response()
    }
}
