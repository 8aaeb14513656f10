//! Handler for `POST /api/generate-video`.
//!
//! As with images, no video bytes exist: the model produces a script/
//! storyboard and the artifact url is a placeholder.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use publixy_core::artifact::{GeneratedVideo, VideoMetadata, PLACEHOLDER_VIDEO_URL};
use publixy_core::prompt;
use publixy_core::request::GenerateVideoRequest;
use publixy_core::types::video_id;
use publixy_db::models::artifact::NewGeneratedVideo;
use publixy_db::repositories::GeneratedVideoRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/generate-video
pub async fn generate_video(
    State(state): State<AppState>,
    Json(input): Json<GenerateVideoRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let resolved_prompt = prompt::video_prompt(&input);
    let script = state.model.generate(&resolved_prompt).await?;

    let now = chrono::Utc::now();
    let artifact = GeneratedVideo {
        id: video_id(now.timestamp_millis()),
        url: PLACEHOLDER_VIDEO_URL.to_string(),
        prompt: resolved_prompt,
        script,
        metadata: VideoMetadata {
            duration: input.duration,
            style: input.style.clone(),
            brief: input.brief.clone(),
            created_at: now,
        },
    };

    persist_artifact(&state, &artifact).await;

    Ok(Json(ApiResponse::ok(
        artifact,
        "Vídeo gerado com sucesso usando Veo 3",
    )))
}

/// Best-effort append to `generated_videos`; failures are logged only.
async fn persist_artifact(state: &AppState, artifact: &GeneratedVideo) {
    let record = NewGeneratedVideo {
        prompt: artifact.prompt.clone(),
        script: artifact.script.clone(),
        metadata: serde_json::to_value(&artifact.metadata).unwrap_or_default(),
    };

    if let Err(err) = GeneratedVideoRepo::insert(&state.pool, &record).await {
        tracing::warn!(error = %err, table = "generated_videos", "Failed to persist generation result");
    }
}
