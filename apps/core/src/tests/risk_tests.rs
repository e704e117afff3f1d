//! Risk Aggregator Tests
//!
//! Properties of `assess` over batches produced by the scorer.

use crate::risk::{assess, RiskAssessment, RiskTier};
use crate::sentiment::{Emotion, LexiconScorer, ScoredText, Sentiment};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const TEXTS: &[&str] = &[
    "I hate this, it is terrible and awful",
    "Waiting on support for 3 days now. Very frustrating!",
    "Had a terrible experience with customer service.",
    "Product arrived damaged. Poor packaging!",
    "I love this, it is amazing",
    "Just saw it mentioned in the news today.",
    "Not sure how I feel about the new direction.",
    "Absolutely furious, the refund failed",
    "Quality is always top-notch!",
    "so so",
];

fn scored_batch() -> Vec<ScoredText> {
    let scorer = LexiconScorer::new();
    TEXTS.iter().map(|text| scorer.score(text)).collect()
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let risk = assess(&Vec::<ScoredText>::new());
        assert_eq!(risk, RiskAssessment::empty());
        assert_eq!(risk.score, 0.0);
        assert_eq!(risk.tier, RiskTier::Low);
    }

    #[test]
    fn test_permutation_invariance() {
        let mut batch = scored_batch();
        let expected = assess(&batch);
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..50 {
            batch.shuffle(&mut rng);
            assert_eq!(assess(&batch), expected);
        }
    }

    #[test]
    fn test_ten_angry_negatives_saturate() {
        let batch: Vec<ScoredText> = (0..10)
            .map(|i| ScoredText {
                text: format!("complaint {}", i),
                sentiment: Sentiment::Negative,
                emotion: Emotion::Anger,
                confidence: 90,
            })
            .collect();

        let risk = assess(&batch);
        assert_eq!(risk.score, 100.0);
        assert_eq!(risk.tier, RiskTier::High);
    }

    #[test]
    fn test_single_scored_text_counts_at_most_once() {
        let scorer = LexiconScorer::new();
        for text in TEXTS {
            let risk = assess(std::iter::once(&scorer.score(text)));
            assert!(risk.negative_count <= 1);
            assert!(risk.anger_count <= 1);
            assert!((0.0..=100.0).contains(&risk.score));
        }
    }

    #[test]
    fn test_score_is_always_in_bounds() {
        let batch = scored_batch();
        for len in 0..=batch.len() {
            let risk = assess(&batch[..len]);
            assert!((0.0..=100.0).contains(&risk.score));
            assert_eq!(risk.tier, RiskTier::from_score(risk.score));
        }
    }
}

#[cfg(test)]
mod realistic_batch_tests {
    use super::*;

    #[test]
    fn test_mixed_batch() {
        let batch = scored_batch();
        let risk = assess(&batch);

        let negatives = batch.iter().filter(|s| s.sentiment == Sentiment::Negative).count();
        assert_eq!(risk.negative_count, negatives);
        assert!(risk.negative_count >= 4);
        assert!(risk.anger_count >= 2);
        assert_eq!(risk.tier, RiskTier::High);
    }

    #[test]
    fn test_positive_only_batch_is_low_risk() {
        let scorer = LexiconScorer::new();
        let batch: Vec<ScoredText> = ["Love it", "Great support", "Excellent quality"]
            .iter()
            .map(|t| scorer.score(t))
            .collect();

        let risk = assess(&batch);
        assert_eq!(risk.negative_count, 0);
        assert_eq!(risk.tier, RiskTier::Low);
    }
}
