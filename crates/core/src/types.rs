//! Shared type aliases and identifier builders.
//!
//! Artifact identifiers are timestamp-derived strings, not UUIDs; every
//! generation call mints fresh ids and any id present in model output is
//! discarded. The builders take the timestamp as an argument so tests can
//! pin exact values.

/// UTC timestamp used across domain types.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifier for a generated post: `post_{unix_millis}_{index}`.
pub fn post_id(now_ms: i64, index: usize) -> String {
    format!("post_{now_ms}_{index}")
}

/// Identifier for a generated image artifact: `img_{unix_millis}`.
pub fn image_id(now_ms: i64) -> String {
    format!("img_{now_ms}")
}

/// Identifier for a generated video artifact: `vid_{unix_millis}`.
pub fn video_id(now_ms: i64) -> String {
    format!("vid_{now_ms}")
}
