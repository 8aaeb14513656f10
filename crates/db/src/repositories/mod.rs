//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async insert methods
//! that accept `&PgPool` as the first argument. There is no read path:
//! the artifact tables are a write-only sink.

pub mod generated_image_repo;
pub mod generated_landing_repo;
pub mod generated_post_repo;
pub mod generated_video_repo;

pub use generated_image_repo::GeneratedImageRepo;
pub use generated_landing_repo::GeneratedLandingRepo;
pub use generated_post_repo::GeneratedPostRepo;
pub use generated_video_repo::GeneratedVideoRepo;
