//! Handlers for the content generation endpoints.
//!
//! Every handler follows the same pipeline: validate the request, build
//! the prompt, call the model, parse-or-fallback, persist best-effort,
//! respond. Validation failures reject before any external call; parse
//! failures never surface (the deterministic fallback covers them); sink
//! failures are logged and never fail the request.

pub mod image;
pub mod landing;
pub mod posts;
pub mod video;
