//! User-authored scheduled posts.
//!
//! Independent from [`crate::post::Post`] despite the similar shape:
//! scheduled posts are created directly by the scheduling form, never
//! derived from a generation response. "Publish now" flips the status
//! with no external call.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Platforms a post can be scheduled to.
pub const VALID_PLATFORMS: &[&str] = &["instagram", "facebook", "twitter", "linkedin", "tiktok"];

/// Status of a scheduled post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledPostStatus {
    #[default]
    Scheduled,
    Published,
    Failed,
}

impl ScheduledPostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ScheduledPostStatus::Scheduled => "scheduled",
            ScheduledPostStatus::Published => "published",
            ScheduledPostStatus::Failed => "failed",
        }
    }
}

/// A post queued for publication on one or more platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub platforms: Vec<String>,
    pub scheduled_date: String,
    pub scheduled_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub status: ScheduledPostStatus,
}

impl ScheduledPost {
    /// "Publish now": flips the status to published. Idempotent; the
    /// actual delivery to platform APIs is outside this system.
    pub fn publish_now(&mut self) {
        self.status = ScheduledPostStatus::Published;
    }
}

/// Validate a platform identifier against the known catalog.
pub fn validate_platform(platform: &str) -> Result<(), CoreError> {
    if VALID_PLATFORMS.contains(&platform) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid platform '{platform}'. Must be one of: {}",
            VALID_PLATFORMS.join(", ")
        )))
    }
}

/// Validate a scheduling form submission before it enters the session.
///
/// Title and content must be non-empty after trimming, and at least one
/// known platform must be selected.
pub fn validate_new_scheduled_post(
    title: &str,
    content: &str,
    platforms: &[String],
) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".to_string()));
    }
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    if platforms.is_empty() {
        return Err(CoreError::Validation(
            "at least one platform must be selected".to_string(),
        ));
    }
    for platform in platforms {
        validate_platform(platform)?;
    }
    Ok(())
}
