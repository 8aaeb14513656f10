//! Inbound generation request DTOs and validation.
//!
//! Each content kind has its own request shape; [`GenerationRequest`] is
//! the tagged union dispatched to the matching handler. Validation is a
//! pure pre-flight step: required text fields must be non-empty after
//! trimming. Enum fields are constrained at the serde layer, so an
//! unknown palette/format/duration/goal never reaches a handler.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

fn default_tone() -> String {
    "profissional".to_string()
}

fn default_audience() -> String {
    "geral".to_string()
}

fn default_goal() -> String {
    "engagement".to_string()
}

/// Body for `POST /api/generate-posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePostsRequest {
    pub subject: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_audience")]
    pub audience: String,
    #[serde(default = "default_goal")]
    pub goal: String,
}

impl GeneratePostsRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("subject", &self.subject)
    }
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

/// Color palette applied to generated imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Vibrant,
    Pastel,
    Dark,
    Minimal,
    Warm,
    Cool,
}

impl Palette {
    pub fn as_str(self) -> &'static str {
        match self {
            Palette::Vibrant => "vibrant",
            Palette::Pastel => "pastel",
            Palette::Dark => "dark",
            Palette::Minimal => "minimal",
            Palette::Warm => "warm",
            Palette::Cool => "cool",
        }
    }
}

/// Output aspect for generated imagery. Defaults to square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Square,
    Landscape,
    Portrait,
}

impl ImageFormat {
    /// Pixel resolution embedded into the image prompt.
    pub fn resolution(self) -> &'static str {
        match self {
            ImageFormat::Square => "1080x1080",
            ImageFormat::Landscape => "1920x1080",
            ImageFormat::Portrait => "1080x1920",
        }
    }
}

/// Body for `POST /api/generate-image`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub palette: Palette,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default)]
    pub reference_image_url: Option<String>,
}

impl GenerateImageRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("prompt", &self.prompt)
    }
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

/// Target clip length. Defaults to 30 seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoDuration {
    #[serde(rename = "15s")]
    Secs15,
    #[default]
    #[serde(rename = "30s")]
    Secs30,
    #[serde(rename = "60s")]
    Secs60,
}

impl VideoDuration {
    pub fn as_str(self) -> &'static str {
        match self {
            VideoDuration::Secs15 => "15s",
            VideoDuration::Secs30 => "30s",
            VideoDuration::Secs60 => "60s",
        }
    }
}

/// Body for `POST /api/generate-video`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateVideoRequest {
    pub prompt: String,
    #[serde(default)]
    pub duration: VideoDuration,
    pub style: String,
    pub brief: String,
}

impl GenerateVideoRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("prompt", &self.prompt)?;
        require_text("style", &self.style)?;
        require_text("brief", &self.brief)
    }
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Primary conversion goal of a landing page. Drives CTA wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingGoal {
    Leads,
    Sales,
    Awareness,
    Engagement,
}

impl LandingGoal {
    pub fn as_str(self) -> &'static str {
        match self {
            LandingGoal::Leads => "leads",
            LandingGoal::Sales => "sales",
            LandingGoal::Awareness => "awareness",
            LandingGoal::Engagement => "engagement",
        }
    }
}

/// Body for `POST /api/generate-landing`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLandingRequest {
    pub briefing: String,
    pub business_type: String,
    pub target_audience: String,
    pub main_goal: LandingGoal,
}

impl GenerateLandingRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("briefing", &self.briefing)
    }
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// Tagged union over all generation request kinds.
///
/// Handlers deserialize their kind-specific payload directly; the union
/// exists so validation dispatches through one pure function and so the
/// request pipeline can be exercised as a single command type.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    Posts(GeneratePostsRequest),
    Image(GenerateImageRequest),
    Video(GenerateVideoRequest),
    LandingPage(GenerateLandingRequest),
}

impl GenerationRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            GenerationRequest::Posts(req) => req.validate(),
            GenerationRequest::Image(req) => req.validate(),
            GenerationRequest::Video(req) => req.validate(),
            GenerationRequest::LandingPage(req) => req.validate(),
        }
    }
}

/// Reject a required text field that is empty after trimming.
fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_request_defaults_applied() {
        let req: GeneratePostsRequest =
            serde_json::from_str(r#"{"subject":"Sustentabilidade"}"#).unwrap();
        assert_eq!(req.tone, "profissional");
        assert_eq!(req.audience, "geral");
        assert_eq!(req.goal, "engagement");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn whitespace_subject_rejected() {
        let req: GeneratePostsRequest = serde_json::from_str(r#"{"subject":"   "}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("subject"));
    }

    #[test]
    fn image_request_parses_enums_and_defaults_format() {
        let req: GenerateImageRequest = serde_json::from_str(
            r#"{"prompt":"logo minimalista","palette":"vibrant","attributes":["modern"]}"#,
        )
        .unwrap();
        assert_eq!(req.palette, Palette::Vibrant);
        assert_eq!(req.format, ImageFormat::Square);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn unknown_palette_rejected_at_deserialization() {
        let result = serde_json::from_str::<GenerateImageRequest>(
            r#"{"prompt":"x","palette":"neon","attributes":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn format_resolution_mapping() {
        assert_eq!(ImageFormat::Square.resolution(), "1080x1080");
        assert_eq!(ImageFormat::Landscape.resolution(), "1920x1080");
        assert_eq!(ImageFormat::Portrait.resolution(), "1080x1920");
    }

    #[test]
    fn video_duration_wire_names() {
        let req: GenerateVideoRequest = serde_json::from_str(
            r#"{"prompt":"p","duration":"15s","style":"dynamic","brief":"b"}"#,
        )
        .unwrap();
        assert_eq!(req.duration, VideoDuration::Secs15);

        let req: GenerateVideoRequest =
            serde_json::from_str(r#"{"prompt":"p","style":"dynamic","brief":"b"}"#).unwrap();
        assert_eq!(req.duration, VideoDuration::Secs30);
    }

    #[test]
    fn video_request_requires_brief() {
        let req: GenerateVideoRequest =
            serde_json::from_str(r#"{"prompt":"p","style":"dynamic","brief":"  "}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn landing_request_parses_goal() {
        let req: GenerateLandingRequest = serde_json::from_str(
            r#"{"briefing":"consultoria","businessType":"SaaS","targetAudience":"PMEs","mainGoal":"leads"}"#,
        )
        .unwrap();
        assert_eq!(req.main_goal, LandingGoal::Leads);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn union_dispatches_validation() {
        let req = GenerationRequest::Posts(GeneratePostsRequest {
            subject: "".into(),
            tone: default_tone(),
            audience: default_audience(),
            goal: default_goal(),
        });
        assert!(req.validate().is_err());
    }
}
