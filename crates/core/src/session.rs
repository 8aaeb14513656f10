//! In-memory session store owned by the presentation layer.
//!
//! Generation handlers are stateless; the store is where their results
//! are merged and where lifecycle transitions are applied. All updates
//! are keyed by entity id, so responses resolving out of order only ever
//! touch the entity they target. Nothing is shared across sessions and
//! nothing reads back from the database.

use crate::campaign::AdCampaign;
use crate::post::{Post, PostStatus};
use crate::scheduling::ScheduledPost;

#[derive(Debug, Default)]
pub struct SessionStore {
    posts: Vec<Post>,
    scheduled: Vec<ScheduledPost>,
    campaigns: Vec<AdCampaign>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- generated posts ----

    /// Replace the working set with a fresh generation batch.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Approve one post. Returns whether the status changed.
    pub fn approve_post(&mut self, id: &str) -> bool {
        self.post_mut(id).is_some_and(Post::approve)
    }

    /// Schedule one approved post. Returns whether the status changed.
    pub fn schedule_post(&mut self, id: &str) -> bool {
        self.post_mut(id).is_some_and(Post::schedule)
    }

    /// Approve every post in the current set; repeated application of the
    /// single-post transition, no joint atomicity. Returns how many changed.
    pub fn approve_all(&mut self) -> usize {
        self.posts
            .iter_mut()
            .map(Post::approve)
            .filter(|&changed| changed)
            .count()
    }

    /// Schedule exactly the subset currently approved. Returns how many
    /// changed.
    pub fn schedule_approved(&mut self) -> usize {
        self.posts
            .iter_mut()
            .filter(|p| p.status == PostStatus::Approved)
            .map(Post::schedule)
            .filter(|&changed| changed)
            .count()
    }

    /// Attach a generated image url to the targeted post.
    pub fn attach_image(&mut self, id: &str, url: &str) -> bool {
        match self.post_mut(id) {
            Some(post) => {
                post.attach_image(url);
                true
            }
            None => false,
        }
    }

    /// Attach a generated video url to the targeted post.
    pub fn attach_video(&mut self, id: &str, url: &str) -> bool {
        match self.post_mut(id) {
            Some(post) => {
                post.attach_video(url);
                true
            }
            None => false,
        }
    }

    // ---- scheduled posts ----

    pub fn add_scheduled(&mut self, post: ScheduledPost) {
        self.scheduled.push(post);
    }

    pub fn scheduled(&self) -> &[ScheduledPost] {
        &self.scheduled
    }

    /// Flip a scheduled post to published. Returns whether it was found.
    pub fn publish_now(&mut self, id: &str) -> bool {
        match self.scheduled.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.publish_now();
                true
            }
            None => false,
        }
    }

    /// Remove a scheduled post. The only deletion the system performs.
    pub fn delete_scheduled(&mut self, id: &str) -> bool {
        let before = self.scheduled.len();
        self.scheduled.retain(|p| p.id != id);
        self.scheduled.len() < before
    }

    // ---- campaigns ----

    pub fn add_campaign(&mut self, campaign: AdCampaign) {
        self.campaigns.push(campaign);
    }

    pub fn campaigns(&self) -> &[AdCampaign] {
        &self.campaigns
    }
}
