//! Risk Aggregator.
//!
//! Turns a batch of scored mentions into a single brand-level risk score.
//! The model is a plain linear combination of negative volume, hostile
//! (anger/frustration) volume and the average confidence of negative calls.
//! It does no significance testing and no time decay.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sentiment::{ScoredText, Sentiment};

/// Points per negative mention
const NEGATIVE_WEIGHT: f64 = 8.0;
/// Points per angry or frustrated mention
const HOSTILE_WEIGHT: f64 = 12.0;
/// Points per unit of average negative confidence
const CONFIDENCE_WEIGHT: f64 = 0.3;
const MAX_SCORE: f64 = 100.0;

const HIGH_THRESHOLD: f64 = 70.0;
const MEDIUM_THRESHOLD: f64 = 40.0;

/// Display bucket for a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// `> 70` high, `> 40` medium, otherwise low
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_THRESHOLD {
            RiskTier::High
        } else if score > MEDIUM_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Brand-level risk derived from a batch of scored texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk score (0.0 - 100.0)
    pub score: f64,
    pub tier: RiskTier,
    pub negative_count: usize,
    /// Mentions whose emotion is anger or frustration
    pub anger_count: usize,
}

impl RiskAssessment {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            tier: RiskTier::Low,
            negative_count: 0,
            anger_count: 0,
        }
    }
}

/// Assess brand risk over a batch of scored texts
///
/// Order of `items` does not matter: every term is a count or an integer sum.
pub fn assess<'a, I>(items: I) -> RiskAssessment
where
    I: IntoIterator<Item = &'a ScoredText>,
{
    let mut negative_count = 0usize;
    let mut anger_count = 0usize;
    let mut negative_confidence_sum = 0u64;

    for item in items {
        if item.sentiment == Sentiment::Negative {
            negative_count += 1;
            negative_confidence_sum += u64::from(item.confidence);
        }
        if item.emotion.is_hostile() {
            anger_count += 1;
        }
    }

    let avg_negative_confidence = if negative_count > 0 {
        negative_confidence_sum as f64 / negative_count as f64
    } else {
        0.0
    };

    let raw = negative_count as f64 * NEGATIVE_WEIGHT
        + anger_count as f64 * HOSTILE_WEIGHT
        + avg_negative_confidence * CONFIDENCE_WEIGHT;
    let score = raw.clamp(0.0, MAX_SCORE);

    RiskAssessment {
        score,
        tier: RiskTier::from_score(score),
        negative_count,
        anger_count,
    }
}
