//! Handler for `POST /api/generate-landing`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use publixy_core::artifact::LandingPage;
use publixy_core::fallback;
use publixy_core::prompt;
use publixy_core::request::GenerateLandingRequest;
use publixy_db::models::artifact::NewGeneratedLanding;
use publixy_db::repositories::GeneratedLandingRepo;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/generate-landing
///
/// When no JSON object can be extracted from the reply, the deterministic
/// template (hero, benefits, contact form) takes over, so the response
/// always carries complete landing content.
pub async fn generate_landing(
    State(state): State<AppState>,
    Json(input): Json<GenerateLandingRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let response = state.model.generate(&prompt::landing_prompt(&input)).await?;
    let landing = fallback::landing_from_response(&response, &input);

    persist_landing(&state, &input, &landing).await;

    Ok(Json(ApiResponse::ok(
        landing,
        "Landing page gerada com sucesso",
    )))
}

/// Best-effort append to `generated_landings`; failures are logged only.
async fn persist_landing(state: &AppState, input: &GenerateLandingRequest, landing: &LandingPage) {
    let record = NewGeneratedLanding {
        briefing: input.briefing.clone(),
        landing_data: serde_json::to_value(landing).unwrap_or_default(),
        metadata: serde_json::json!({
            "businessType": input.business_type,
            "targetAudience": input.target_audience,
            "mainGoal": input.main_goal,
            "created_at": chrono::Utc::now().to_rfc3339(),
        }),
    };

    if let Err(err) = GeneratedLandingRepo::insert(&state.pool, &record).await {
        tracing::warn!(error = %err, table = "generated_landings", "Failed to persist generation result");
    }
}
