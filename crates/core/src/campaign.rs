//! Ad campaign drafts held entirely client-side.
//!
//! No backend persistence path exists for campaigns; they live in the
//! session store until the browser session ends. The reach estimate is a
//! deliberately simplified formula shown in the builder UI.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Age brackets offered by the audience step.
pub const VALID_AGE_RANGES: &[&str] = &["18-24", "25-34", "35-44", "45-54", "55+"];

/// Campaign objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignObjective {
    #[default]
    Awareness,
    Traffic,
    Engagement,
    Leads,
    Conversions,
}

impl CampaignObjective {
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignObjective::Awareness => "awareness",
            CampaignObjective::Traffic => "traffic",
            CampaignObjective::Engagement => "engagement",
            CampaignObjective::Leads => "leads",
            CampaignObjective::Conversions => "conversions",
        }
    }
}

/// Campaign lifecycle status. New campaigns always start as drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
}

/// Audience targeting for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAudience {
    pub age_range: String,
    pub interests: Vec<String>,
    pub location: String,
}

/// Creative assets for a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCreative {
    pub headline: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cta: String,
}

/// An ad campaign draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCampaign {
    pub id: String,
    pub name: String,
    pub objective: CampaignObjective,
    /// Daily budget in the account currency.
    pub budget: f64,
    /// Run length in days.
    pub duration_days: u32,
    pub audience: CampaignAudience,
    pub creative: CampaignCreative,
    #[serde(default)]
    pub status: CampaignStatus,
}

/// Validate a campaign before it enters the session: a name and a
/// creative headline are mandatory.
pub fn validate_new_campaign(name: &str, headline: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if headline.trim().is_empty() {
        return Err(CoreError::Validation(
            "creative headline must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Simplified reach estimate shown in the builder:
/// `⌊budget × 500 × (0.1 × interests + 1)⌋`.
pub fn estimate_reach(daily_budget: f64, interest_count: usize) -> u64 {
    let base = daily_budget * 500.0;
    let multiplier = interest_count as f64 * 0.1 + 1.0;
    (base * multiplier).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reach_scales_with_budget_and_interests() {
        assert_eq!(estimate_reach(100.0, 0), 50_000);
        assert_eq!(estimate_reach(100.0, 2), 60_000);
        assert_eq!(estimate_reach(10.0, 8), 9_000);
    }

    #[test]
    fn campaign_requires_name_and_headline() {
        assert!(validate_new_campaign("Lançamento", "Headline").is_ok());
        assert!(validate_new_campaign("", "Headline").is_err());
        assert!(validate_new_campaign("Lançamento", "   ").is_err());
    }

    #[test]
    fn objective_parses_lowercase_ids() {
        let obj: CampaignObjective = serde_json::from_str(r#""conversions""#).unwrap();
        assert_eq!(obj, CampaignObjective::Conversions);
        assert_eq!(obj.as_str(), "conversions");
    }

    #[test]
    fn new_campaigns_default_to_draft() {
        let campaign: AdCampaign = serde_json::from_str(
            r#"{
                "id": "1",
                "name": "Campanha",
                "objective": "awareness",
                "budget": 100,
                "durationDays": 7,
                "audience": {"ageRange": "25-34", "interests": [], "location": "Brasil"},
                "creative": {"headline": "H", "description": "D", "cta": "Saiba Mais"}
            }"#,
        )
        .unwrap();
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.audience.age_range, "25-34");
    }
}
