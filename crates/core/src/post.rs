//! Post entity and its lifecycle state machine.
//!
//! Statuses move linearly `generated → approved → scheduled → published`.
//! Approval is mandatory before scheduling, and media enrichment never
//! changes status. Nothing here drives a post to `published`; only the
//! separately modeled [`crate::scheduling::ScheduledPost`] reaches it.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a generated post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Generated,
    Approved,
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Generated => "generated",
            PostStatus::Approved => "approved",
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

/// A social-media post produced by one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
}

impl Post {
    /// Approve a post. Only a `generated` post changes state; on any
    /// other status this is a no-op. Returns whether the status changed.
    pub fn approve(&mut self) -> bool {
        if self.status == PostStatus::Generated {
            self.status = PostStatus::Approved;
            true
        } else {
            false
        }
    }

    /// Schedule an approved post. A post that was never approved stays
    /// where it is. Returns whether the status changed.
    pub fn schedule(&mut self) -> bool {
        if self.status == PostStatus::Approved {
            self.status = PostStatus::Scheduled;
            true
        } else {
            false
        }
    }

    /// Attach a generated image url. Valid in any state; status is untouched.
    pub fn attach_image(&mut self, url: impl Into<String>) {
        self.image_url = Some(url.into());
    }

    /// Attach a generated video url. Valid in any state; status is untouched.
    pub fn attach_video(&mut self, url: impl Into<String>) {
        self.video_url = Some(url.into());
    }
}

/// A post as emitted by the model, before ids and lifecycle state exist.
///
/// Lenient on purpose: models omit optional fields and sometimes invent
/// an `id`, which serde drops here so fresh ids always win.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub cta: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub magic_prompt: Option<String>,
}

impl ModelPost {
    /// A model post is usable when it has a title, a body, and at least
    /// one hashtag.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.content.trim().is_empty()
            && !self.hashtags.is_empty()
    }

    pub fn into_post(self) -> Post {
        Post {
            id: String::new(),
            title: self.title,
            content: self.content,
            hashtags: self.hashtags,
            cta: self.cta,
            media_type: self.media_type,
            magic_prompt: self.magic_prompt,
            image_url: None,
            video_url: None,
            status: PostStatus::Generated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "post_1_0".into(),
            title: "t".into(),
            content: "c".into(),
            hashtags: vec!["#x".into()],
            cta: None,
            media_type: None,
            magic_prompt: None,
            image_url: None,
            video_url: None,
            status: PostStatus::Generated,
        }
    }

    #[test]
    fn approve_moves_generated_to_approved() {
        let mut p = post();
        assert!(p.approve());
        assert_eq!(p.status, PostStatus::Approved);
    }

    #[test]
    fn approve_is_idempotent() {
        let mut p = post();
        p.approve();
        assert!(!p.approve());
        assert_eq!(p.status, PostStatus::Approved);
    }

    #[test]
    fn schedule_requires_approval_first() {
        let mut p = post();
        assert!(!p.schedule());
        assert_eq!(p.status, PostStatus::Generated);
    }

    #[test]
    fn schedule_moves_approved_to_scheduled() {
        let mut p = post();
        p.approve();
        assert!(p.schedule());
        assert_eq!(p.status, PostStatus::Scheduled);
    }

    #[test]
    fn approve_after_schedule_is_noop() {
        let mut p = post();
        p.approve();
        p.schedule();
        assert!(!p.approve());
        assert_eq!(p.status, PostStatus::Scheduled);
    }

    #[test]
    fn enrichment_never_changes_status() {
        let mut p = post();
        p.attach_image("/api/placeholder-image");
        assert_eq!(p.status, PostStatus::Generated);

        p.approve();
        p.attach_video("/api/placeholder-video");
        assert_eq!(p.status, PostStatus::Approved);
        assert_eq!(p.image_url.as_deref(), Some("/api/placeholder-image"));
        assert_eq!(p.video_url.as_deref(), Some("/api/placeholder-video"));
    }

    #[test]
    fn model_post_drops_invented_id() {
        let raw: ModelPost = serde_json::from_str(
            r##"{"id":"model-7","title":"T","content":"C","hashtags":["#a"],"mediaType":"image"}"##,
        )
        .unwrap();
        let p = raw.into_post();
        assert!(p.id.is_empty());
        assert_eq!(p.media_type.as_deref(), Some("image"));
        assert_eq!(p.status, PostStatus::Generated);
    }

    #[test]
    fn model_post_without_hashtags_is_malformed() {
        let raw: ModelPost =
            serde_json::from_str(r#"{"title":"T","content":"C","hashtags":[]}"#).unwrap();
        assert!(!raw.is_well_formed());
    }

    #[test]
    fn post_serializes_camel_case() {
        let mut p = post();
        p.media_type = Some("carousel".into());
        p.magic_prompt = Some("mp".into());
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["mediaType"], "carousel");
        assert_eq!(value["magicPrompt"], "mp");
        assert_eq!(value["status"], "generated");
        assert!(value.get("imageUrl").is_none());
    }
}
