//! Emotion sub-classification.
//!
//! Keyword scan over the normalized text, independent of the weighted scan.
//! Categories are tried in priority order and the first matching one wins.

use super::lexicon::{
    HEDGING_PHRASES, INTERROGATIVE_WORDS, MIXED_PHRASES, NEGATIVE_EMOTIONS, POSITIVE_EMOTIONS,
};
use super::normalize::NormalizedText;
use super::types::{Emotion, Sentiment};

/// A neutral reading and the confidence it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeutralPattern {
    pub emotion: Emotion,
    pub confidence: u8,
}

/// Pick the emotion for a text whose sentiment is already decided
pub fn classify(text: &NormalizedText, sentiment: Sentiment) -> Emotion {
    match sentiment {
        Sentiment::Positive => first_match(text, POSITIVE_EMOTIONS).unwrap_or(Emotion::Satisfaction),
        Sentiment::Negative => {
            first_match(text, NEGATIVE_EMOTIONS).unwrap_or(Emotion::Disappointment)
        }
        Sentiment::Neutral => neutral_pattern(text).emotion,
    }
}

fn first_match(text: &NormalizedText, categories: &[(Emotion, &[&str])]) -> Option<Emotion> {
    categories
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.has_token(keyword)))
        .map(|(emotion, _)| *emotion)
}

/// Neutral-pattern fallback for texts without any lexicon hit
///
/// Checked in order: interrogative, hedging, mixed, plain neutral.
pub fn neutral_pattern(text: &NormalizedText) -> NeutralPattern {
    let interrogative = text.lowercase.contains('?')
        || INTERROGATIVE_WORDS.iter().any(|word| text.has_token(word));
    if interrogative {
        return NeutralPattern {
            emotion: Emotion::Curious,
            confidence: 65,
        };
    }

    if HEDGING_PHRASES.iter().any(|phrase| text.has_phrase(phrase)) {
        return NeutralPattern {
            emotion: Emotion::Uncertain,
            confidence: 60,
        };
    }

    if MIXED_PHRASES.iter().any(|phrase| text.has_phrase(phrase)) {
        return NeutralPattern {
            emotion: Emotion::Mixed,
            confidence: 55,
        };
    }

    NeutralPattern {
        emotion: Emotion::Neutral,
        confidence: 50,
    }
}
