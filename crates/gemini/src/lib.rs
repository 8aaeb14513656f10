//! Client for the Google Generative Language (Gemini) API.
//!
//! One synchronous call per invocation: no retry, no backoff, no
//! client-side timeout. Errors propagate immediately to the caller.

mod client;

pub use client::{GeminiClient, GeminiError, DEFAULT_API_URL, DEFAULT_MODEL};

use async_trait::async_trait;

/// Seam between handlers and the hosted model.
///
/// Implementations wrap a concrete provider; tests substitute scripted
/// replies.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send one prompt and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}
