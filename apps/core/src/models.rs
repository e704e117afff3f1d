use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::config::BackendKind;
use crate::error::AppError;
use crate::risk::RiskAssessment;
use crate::sentiment::{BackendStatus, Emotion, ScoredText, ScoringPath, Sentiment};

/// Brand used when a request carries none.
pub const DEFAULT_BRAND: &str = "Unknown Brand";

/// Represents a request to analyze a brand.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct BrandRequest {
    /// The brand name, trimmed.
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
}

impl Default for BrandRequest {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

impl BrandRequest {
    /// Build a validated request. `None` falls back to the default brand.
    pub fn new(brand: Option<&str>) -> Result<Self, AppError> {
        let request = match brand {
            Some(name) => Self {
                brand: name.trim().to_string(),
            },
            None => Self::default(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Social platform a mention was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Reddit,
    Instagram,
    News,
    Forum,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Reddit,
        Platform::Instagram,
        Platform::News,
        Platform::Forum,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Reddit => "Reddit",
            Platform::Instagram => "Instagram",
            Platform::News => "News",
            Platform::Forum => "Forum",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single mention of a brand, scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// 1-based position within the report.
    pub id: usize,
    pub text: String,
    pub platform: Platform,
    pub sentiment: Sentiment,
    pub emotion: Emotion,
    /// Scorer confidence (0 - 100).
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub engagement: u32,
    pub location: String,
}

impl Mention {
    /// The scoring triple of this mention.
    pub fn scored(&self) -> ScoredText {
        ScoredText {
            text: self.text.clone(),
            sentiment: self.sentiment,
            emotion: self.emotion,
            confidence: self.confidence,
        }
    }
}

/// Aggregate figures of a brand analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub positive_mentions: usize,
    pub negative_mentions: usize,
    pub neutral_mentions: usize,
    /// Share of positive mentions in percent, one decimal.
    pub sentiment_score: f64,
    /// Mentions whose emotion is anger or frustration.
    pub anger_mentions: usize,
    pub risk: RiskAssessment,
}

/// Full result of analyzing one brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier (UUID).
    pub id: String,
    pub brand: String,
    pub generated_at: DateTime<Utc>,
    pub mentions: Vec<Mention>,
    pub total_mentions: usize,
    pub summary: Summary,
    pub insights: Vec<String>,
    /// How the mentions were scored.
    pub scoring: ScoringPath,
}

/// Scored texts plus their aggregate risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBatch {
    pub items: Vec<ScoredText>,
    pub risk: RiskAssessment,
}

/// Mention volume and sentiment for one brand in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSnapshot {
    pub name: String,
    pub mentions: u32,
    /// Positive share in percent.
    pub sentiment_score: u32,
}

/// A brand compared against its usual competitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub main_brand: BrandSnapshot,
    pub competitors: Vec<BrandSnapshot>,
}

/// Liveness information printed by the `health` command.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub scoring: ScoringPath,
}

impl HealthStatus {
    /// "degraded" when a configured backend is not in use, otherwise "ok".
    pub fn new(configured: BackendKind, status: &BackendStatus) -> Self {
        let degraded = configured != BackendKind::None && !status.is_ready();
        Self {
            status: if degraded { "degraded" } else { "ok" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            scoring: status.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_is_trimmed() {
        let request = BrandRequest::new(Some("  Nike \n")).unwrap();
        assert_eq!(request.brand, "Nike");
    }

    #[test]
    fn test_missing_brand_uses_default() {
        let request = BrandRequest::new(None).unwrap();
        assert_eq!(request.brand, DEFAULT_BRAND);
    }

    #[test]
    fn test_blank_brand_is_rejected() {
        assert!(matches!(
            BrandRequest::new(Some("   ")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_long_brand_is_rejected() {
        let name = "x".repeat(101);
        assert!(BrandRequest::new(Some(&name)).is_err());
        assert!(BrandRequest::new(Some(&name[..100])).is_ok());
    }

    #[test]
    fn test_platform_serializes_capitalized() {
        let json = serde_json::to_string(&Platform::Instagram).unwrap();
        assert_eq!(json, "\"Instagram\"");
        assert_eq!(Platform::News.to_string(), "News");
    }

    #[test]
    fn test_health_reports_unused_backend_as_degraded() {
        let down = BackendStatus::Unavailable {
            backend: "http",
            reason: "connection refused".to_string(),
        };
        let health = HealthStatus::new(BackendKind::Http, &down);
        assert_eq!(health.status, "degraded");
        assert_eq!(health.scoring.backend_error.as_deref(), Some("connection refused"));

        let health = HealthStatus::new(BackendKind::None, &BackendStatus::Disabled);
        assert_eq!(health.status, "ok");
        assert_eq!(health.scoring.engine, "lexicon");
    }
}
