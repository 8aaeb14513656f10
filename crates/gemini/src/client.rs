//! REST client for the Gemini `generateContent` endpoint.
//!
//! Wraps the Generative Language HTTP API using [`reqwest`]. Only text
//! generation is exposed; the caller supplies a fully assembled prompt
//! and receives the concatenated candidate text.

use async_trait::async_trait;
use serde::Deserialize;

use crate::TextModel;

/// Default public endpoint for the Generative Language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for all content generation calls.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// HTTP client for the hosted Gemini service.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The reply contained no candidate text.
    #[error("Gemini returned an empty response")]
    Empty,
}

/// Response body of `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client against the public endpoint with the default model.
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(DEFAULT_API_URL.to_string(), api_key, DEFAULT_MODEL.to_string())
    }

    /// Create a client against a custom base url and model (regional
    /// endpoints, mock servers).
    pub fn with_api_url(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Send one prompt. Sends a `POST
    /// /v1beta/models/{model}:generateContent` request and returns the
    /// first candidate's text.
    async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.api_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let reply: GenerateContentResponse = Self::parse_response(response).await?;
        candidate_text(reply).ok_or(GeminiError::Empty)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GeminiError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GeminiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Concatenate the text parts of the first candidate, if any.
fn candidate_text(reply: GenerateContentResponse) -> Option<String> {
    let content = reply.candidates.into_iter().next()?.content?;
    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    (!text.is_empty()).then_some(text)
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate_content(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn candidate_text_concatenates_parts() {
        let reply = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Olá, "},{"text":"mundo"}]}}]}"#,
        );
        assert_eq!(candidate_text(reply).as_deref(), Some("Olá, mundo"));
    }

    #[test]
    fn only_first_candidate_is_used() {
        let reply = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"primeiro"}]}},
                {"content":{"parts":[{"text":"segundo"}]}}
            ]}"#,
        );
        assert_eq!(candidate_text(reply).as_deref(), Some("primeiro"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(candidate_text(parse(r#"{"candidates":[]}"#)).is_none());
        assert!(candidate_text(parse(r#"{}"#)).is_none());
    }

    #[test]
    fn candidate_without_text_parts_yields_none() {
        let reply = parse(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#);
        assert!(candidate_text(reply).is_none());
    }
}
