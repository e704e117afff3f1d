//! Lexicon Scorer - weighted keyword sentiment scoring.
//!
//! Pure and stateless: the only shared data is the read-only lexicon.
//! Never fails; degenerate input yields the neutral default.

use tracing::debug;

use super::emotion;
use super::lexicon::{Lexicon, Polarity};
use super::normalize::NormalizedText;
use super::types::{Emotion, ScoredText, Sentiment};

/// Confidence ceiling for lexicon calls
const MAX_CONFIDENCE: f64 = 95.0;
/// Confidence before any lexicon evidence
const BASE_CONFIDENCE: f64 = 50.0;
/// Confidence gained per point of dominant score
const CONFIDENCE_PER_POINT: f64 = 3.0;
/// Confidence when positive and negative evidence cancel out
const TIE_CONFIDENCE: u8 = 60;

/// Accumulated evidence from the weighted scan
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScanTotals {
    pub positive: f64,
    pub negative: f64,
}

/// Keyword/weight based scorer
pub struct LexiconScorer {
    lexicon: &'static Lexicon,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::shared(),
        }
    }

    /// Score a raw text
    pub fn score(&self, text: &str) -> ScoredText {
        let normalized = NormalizedText::new(text);
        self.score_normalized(text, &normalized)
    }

    /// Score an already normalized text, `text` is kept verbatim in the result
    pub fn score_normalized(&self, text: &str, normalized: &NormalizedText) -> ScoredText {
        if normalized.is_degenerate() {
            return ScoredText::neutral(text);
        }

        let totals = self.scan(&normalized.tokens);
        let scored = decide(text, normalized, totals);

        debug!(
            positive = totals.positive,
            negative = totals.negative,
            sentiment = %scored.sentiment,
            emotion = %scored.emotion,
            confidence = scored.confidence,
            "Lexicon scan complete"
        );

        scored
    }

    /// Weighted left-to-right scan
    ///
    /// A modifier carries over unscored words and is reset once a lexicon
    /// word consumes it ("not a good product" negates "good"). A later
    /// modifier replaces an earlier one, so "not very good" is intensified.
    pub fn scan(&self, tokens: &[String]) -> ScanTotals {
        let mut totals = ScanTotals::default();
        let mut current_modifier = 1.0_f64;

        for token in tokens {
            if let Some(modifier) = self.lexicon.modifier(token) {
                current_modifier = modifier.factor();
                continue;
            }

            match self.lexicon.polarity(token) {
                Some(Polarity::Positive(weight)) => {
                    totals.positive += (weight as f64 * current_modifier).max(0.0);
                    current_modifier = 1.0;
                }
                Some(Polarity::Negative(weight)) => {
                    totals.negative += weight as f64 * current_modifier.abs();
                    current_modifier = 1.0;
                }
                None => {}
            }
        }

        totals
    }
}

fn decide(text: &str, normalized: &NormalizedText, totals: ScanTotals) -> ScoredText {
    let ScanTotals { positive, negative } = totals;

    if positive == 0.0 && negative == 0.0 {
        let pattern = emotion::neutral_pattern(normalized);
        return ScoredText::new(text, Sentiment::Neutral, pattern.emotion, pattern.confidence);
    }

    if negative > positive {
        let emotion = emotion::classify(normalized, Sentiment::Negative);
        return ScoredText::new(text, Sentiment::Negative, emotion, calibrate(negative));
    }

    if positive > negative {
        let emotion = emotion::classify(normalized, Sentiment::Positive);
        return ScoredText::new(text, Sentiment::Positive, emotion, calibrate(positive));
    }

    ScoredText::new(text, Sentiment::Neutral, Emotion::Neutral, TIE_CONFIDENCE)
}

/// Map the dominant score onto 50..=95
fn calibrate(dominant: f64) -> u8 {
    (BASE_CONFIDENCE + dominant * CONFIDENCE_PER_POINT)
        .min(MAX_CONFIDENCE)
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        NormalizedText::new(text).tokens
    }

    #[test]
    fn test_plain_weights() {
        let scorer = LexiconScorer::new();
        let totals = scorer.scan(&tokens("great service, terrible app"));
        assert_eq!(totals, ScanTotals { positive: 2.0, negative: 3.0 });
    }

    #[test]
    fn test_negation_zeroes_positive_word() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.scan(&tokens("not good")).positive, 0.0);
    }

    #[test]
    fn test_negation_keeps_negative_magnitude() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.scan(&tokens("not terrible")).negative, 3.0);
    }

    #[test]
    fn test_intensifier_scales_next_word_only() {
        let scorer = LexiconScorer::new();
        let totals = scorer.scan(&tokens("very good and good"));
        assert!((totals.positive - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_modifier_carries_over_unscored_words() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.scan(&tokens("This is not a good product")).positive, 0.0);
        assert_eq!(scorer.scan(&tokens("not the best")).positive, 0.0);

        let totals = scorer.scan(&tokens("really, the support was great"));
        assert!((totals.positive - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_modifier_is_spent_by_first_scored_word() {
        let scorer = LexiconScorer::new();
        // "not" is consumed by "good", "great" keeps its weight
        let totals = scorer.scan(&tokens("not good but great"));
        assert_eq!(totals.positive, 2.0);
    }

    #[test]
    fn test_last_modifier_wins() {
        let scorer = LexiconScorer::new();
        assert!((scorer.scan(&tokens("not very good")).positive - 1.5).abs() < 1e-9);
        assert!((scorer.scan(&tokens("very very good")).positive - 1.5).abs() < 1e-9);
        assert_eq!(scorer.scan(&tokens("not not good")).positive, 0.0);
        assert!((scorer.scan(&tokens("very not bad")).negative - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negated_filler_sentence_is_neutral() {
        let scorer = LexiconScorer::new();
        for text in ["This is not a good product", "not the best"] {
            let scored = scorer.score(text);
            assert_eq!(scored.sentiment, Sentiment::Neutral, "for '{}'", text);
            assert_eq!(scored.emotion, Emotion::Neutral, "for '{}'", text);
            assert_eq!(scored.confidence, 50, "for '{}'", text);
        }

        let scored = scorer.score("not very good");
        assert_eq!(scored.sentiment, Sentiment::Positive);
        assert_eq!(scored.confidence, 55);
    }

    #[test]
    fn test_calibration() {
        assert_eq!(calibrate(1.0), 53);
        assert_eq!(calibrate(2.6), 58);
        assert_eq!(calibrate(9.0), 77);
        assert_eq!(calibrate(100.0), 95);
    }

    #[test]
    fn test_tie_is_neutral() {
        let scorer = LexiconScorer::new();
        let scored = scorer.score("good but bad");
        assert_eq!(scored.sentiment, Sentiment::Neutral);
        assert_eq!(scored.emotion, Emotion::Neutral);
        assert_eq!(scored.confidence, 60);
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let scorer = LexiconScorer::new();
        let scored = scorer.score("  Great!! https://x.io  ");
        assert_eq!(scored.text, "  Great!! https://x.io  ");
        assert_eq!(scored.sentiment, Sentiment::Positive);
    }
}
