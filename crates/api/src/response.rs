//! Success envelope for API handlers.
//!
//! All success payloads use `{ "success": true, "data": ..., "message": ... }`.
//! Use [`ApiResponse::ok`] instead of ad-hoc `serde_json::json!` blocks to
//! get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn ok(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}
