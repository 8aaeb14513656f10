//! Route registration.

pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/generate-posts", post(handlers::posts::generate_posts))
        .route("/generate-image", post(handlers::image::generate_image))
        .route("/generate-video", post(handlers::video::generate_video))
        .route(
            "/generate-landing",
            post(handlers::landing::generate_landing),
        )
}
