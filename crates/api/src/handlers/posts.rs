//! Handler for `POST /api/generate-posts`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use publixy_core::fallback;
use publixy_core::post::Post;
use publixy_core::prompt;
use publixy_core::request::GeneratePostsRequest;
use publixy_core::types::post_id;
use publixy_db::models::artifact::NewGeneratedPosts;
use publixy_db::repositories::GeneratedPostRepo;
use publixy_gemini::{GeminiError, TextModel};

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/generate-posts
///
/// Always answers with exactly [`fallback::POSTS_PER_BATCH`] posts: the model's
/// JSON when it parses into a full well-formed batch, the deterministic
/// fallback batch otherwise. Partial batches are never returned.
pub async fn generate_posts(
    State(state): State<AppState>,
    Json(input): Json<GeneratePostsRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let posts = generate_post_batch(state.model.as_ref(), &input).await?;

    persist_batch(&state, &input, &posts).await;

    Ok(Json(ApiResponse::ok(posts, "Posts gerados com sucesso")))
}

/// Call the model and shape its reply into the guaranteed batch, with
/// fresh ids assigned to model-derived and fallback posts alike.
async fn generate_post_batch(
    model: &dyn TextModel,
    input: &GeneratePostsRequest,
) -> Result<Vec<Post>, GeminiError> {
    let response = model.generate(&prompt::posts_prompt(input)).await?;

    let now_ms = chrono::Utc::now().timestamp_millis();
    let mut posts = fallback::posts_from_response(&response, input);
    for (index, post) in posts.iter_mut().enumerate() {
        post.id = post_id(now_ms, index);
    }
    Ok(posts)
}

/// Best-effort append to `generated_posts`. A failed write never fails
/// the request; it is logged and the response proceeds.
async fn persist_batch(state: &AppState, input: &GeneratePostsRequest, posts: &[Post]) {
    let record = NewGeneratedPosts {
        subject: input.subject.clone(),
        posts: serde_json::to_value(posts).unwrap_or_default(),
        metadata: serde_json::json!({
            "tone": input.tone,
            "audience": input.audience,
            "goal": input.goal,
            "created_at": chrono::Utc::now().to_rfc3339(),
        }),
    };

    if let Err(err) = GeneratedPostRepo::insert(&state.pool, &record).await {
        tracing::warn!(error = %err, table = "generated_posts", "Failed to persist generation result");
    }
}
