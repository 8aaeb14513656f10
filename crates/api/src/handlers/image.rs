//! Handler for `POST /api/generate-image`.
//!
//! No image bytes are produced anywhere: the model returns a detailed
//! textual description and the artifact carries a placeholder url. This
//! boundary is deliberate.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use publixy_core::artifact::{GeneratedImage, ImageMetadata, PLACEHOLDER_IMAGE_URL};
use publixy_core::prompt;
use publixy_core::request::GenerateImageRequest;
use publixy_core::types::image_id;
use publixy_db::models::artifact::NewGeneratedImage;
use publixy_db::repositories::GeneratedImageRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/generate-image
pub async fn generate_image(
    State(state): State<AppState>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let resolved_prompt = prompt::image_prompt(&input);
    let description = state.model.generate(&resolved_prompt).await?;

    let now = chrono::Utc::now();
    let artifact = GeneratedImage {
        id: image_id(now.timestamp_millis()),
        url: PLACEHOLDER_IMAGE_URL.to_string(),
        prompt: resolved_prompt,
        description,
        metadata: ImageMetadata {
            palette: input.palette,
            attributes: input.attributes.clone(),
            format: input.format,
            created_at: now,
        },
    };

    persist_artifact(&state, &artifact).await;

    Ok(Json(ApiResponse::ok(
        artifact,
        "Imagem gerada com sucesso usando Nana Banana",
    )))
}

/// Best-effort append to `generated_images`; failures are logged only.
async fn persist_artifact(state: &AppState, artifact: &GeneratedImage) {
    let record = NewGeneratedImage {
        prompt: artifact.prompt.clone(),
        description: artifact.description.clone(),
        metadata: serde_json::to_value(&artifact.metadata).unwrap_or_default(),
    };

    if let Err(err) = GeneratedImageRepo::insert(&state.pool, &record).await {
        tracing::warn!(error = %err, table = "generated_images", "Failed to persist generation result");
    }
}
