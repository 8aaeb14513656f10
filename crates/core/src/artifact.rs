//! Generated artifact payloads returned by the media and landing handlers.
//!
//! No media bytes exist anywhere in the system: the `url` fields carry
//! static placeholders and the substance of an artifact is the resolved
//! prompt plus the model's textual description or script.

use serde::{Deserialize, Serialize};

use crate::request::{ImageFormat, Palette, VideoDuration};
use crate::types::Timestamp;

/// Placeholder returned for every generated image.
pub const PLACEHOLDER_IMAGE_URL: &str = "/api/placeholder-image";

/// Placeholder returned for every generated video.
pub const PLACEHOLDER_VIDEO_URL: &str = "/api/placeholder-video";

/// One image generation call, persisted once and never updated.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub description: String,
    pub metadata: ImageMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageMetadata {
    pub palette: Palette,
    pub attributes: Vec<String>,
    pub format: ImageFormat,
    pub created_at: Timestamp,
}

/// One video generation call. The `script` is the model's storyboard text.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedVideo {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub script: String,
    pub metadata: VideoMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoMetadata {
    pub duration: VideoDuration,
    pub style: String,
    pub brief: String,
    pub created_at: Timestamp,
}

/// Landing page content, either parsed from the model or synthesized by
/// the deterministic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub headline: String,
    pub subheadline: String,
    pub bullets: Vec<String>,
    pub cta: String,
    pub html: String,
    #[serde(default)]
    pub design_suggestions: DesignSuggestions,
}

/// Colors and typography the model (or fallback) recommends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSuggestions {
    pub colors: Vec<String>,
    pub typography: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_parses_camel_case_wire_shape() {
        let page: LandingPage = serde_json::from_str(
            r##"{
                "headline": "H",
                "subheadline": "S",
                "bullets": ["a", "b"],
                "cta": "Saber Mais",
                "html": "<html></html>",
                "designSuggestions": {"colors": ["#fff"], "typography": "Inter"}
            }"##,
        )
        .unwrap();
        assert_eq!(page.design_suggestions.colors, vec!["#fff"]);
    }

    #[test]
    fn landing_page_missing_html_fails_to_parse() {
        let result = serde_json::from_str::<LandingPage>(
            r#"{"headline":"H","subheadline":"S","bullets":[],"cta":"x"}"#,
        );
        assert!(result.is_err());
    }
}
