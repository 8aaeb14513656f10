//! Insert DTOs for the append-only artifact tables.
//!
//! Payload and metadata columns are JSONB; the api layer serializes its
//! domain types into [`serde_json::Value`] before handing them over.

use serde_json::Value;

/// Row for `generated_posts`: the subject, the full post batch, and the
/// request metadata.
#[derive(Debug, Clone)]
pub struct NewGeneratedPosts {
    pub subject: String,
    pub posts: Value,
    pub metadata: Value,
}

/// Row for `generated_images`: the resolved prompt and the model's
/// description.
#[derive(Debug, Clone)]
pub struct NewGeneratedImage {
    pub prompt: String,
    pub description: String,
    pub metadata: Value,
}

/// Row for `generated_videos`: the resolved prompt and the model's script.
#[derive(Debug, Clone)]
pub struct NewGeneratedVideo {
    pub prompt: String,
    pub script: String,
    pub metadata: Value,
}

/// Row for `generated_landings`: the briefing and the full landing
/// content.
#[derive(Debug, Clone)]
pub struct NewGeneratedLanding {
    pub briefing: String,
    pub landing_data: Value,
    pub metadata: Value,
}
