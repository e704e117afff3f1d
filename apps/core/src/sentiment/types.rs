//! Scored Text - Output structure of the sentiment scorer.
//!
//! Sentiment and emotion are closed enums so a result can never carry an
//! emotion label the rest of the system does not know about.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall polarity of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Emotion sub-classification of a scored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    // Positive branch
    Joy,
    Love,
    Excitement,
    Satisfaction,
    // Negative branch
    Anger,
    Frustration,
    Sadness,
    Fear,
    Disappointment,
    // Neutral patterns
    Curious,
    Uncertain,
    Mixed,
    Neutral,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Love => "love",
            Emotion::Excitement => "excitement",
            Emotion::Satisfaction => "satisfaction",
            Emotion::Anger => "anger",
            Emotion::Frustration => "frustration",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Disappointment => "disappointment",
            Emotion::Curious => "curious",
            Emotion::Uncertain => "uncertain",
            Emotion::Mixed => "mixed",
            Emotion::Neutral => "neutral",
        }
    }

    /// The only sentiment this emotion may be paired with
    pub fn polarity(&self) -> Sentiment {
        match self {
            Emotion::Joy | Emotion::Love | Emotion::Excitement | Emotion::Satisfaction => {
                Sentiment::Positive
            }
            Emotion::Anger
            | Emotion::Frustration
            | Emotion::Sadness
            | Emotion::Fear
            | Emotion::Disappointment => Sentiment::Negative,
            Emotion::Curious | Emotion::Uncertain | Emotion::Mixed | Emotion::Neutral => {
                Sentiment::Neutral
            }
        }
    }

    /// Anger and frustration both count towards brand risk
    pub fn is_hostile(&self) -> bool {
        matches!(self, Emotion::Anger | Emotion::Frustration)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of scoring a single text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredText {
    /// The text as supplied by the caller
    pub text: String,
    /// Detected polarity
    pub sentiment: Sentiment,
    /// Emotion consistent with `sentiment`
    pub emotion: Emotion,
    /// Self-reported certainty (0 - 100)
    pub confidence: u8,
}

impl ScoredText {
    /// Confidence reported for degenerate input (empty, too short)
    pub const DEFAULT_CONFIDENCE: u8 = 50;

    pub(crate) fn new(text: &str, sentiment: Sentiment, emotion: Emotion, confidence: u8) -> Self {
        Self {
            text: text.to_string(),
            sentiment,
            emotion,
            confidence: confidence.min(100),
        }
    }

    /// The `(neutral, neutral, 50)` result
    pub fn neutral(text: &str) -> Self {
        Self::new(
            text,
            Sentiment::Neutral,
            Emotion::Neutral,
            Self::DEFAULT_CONFIDENCE,
        )
    }

    /// Whether emotion and sentiment agree
    pub fn is_consistent(&self) -> bool {
        self.emotion.polarity() == self.sentiment
    }
}
