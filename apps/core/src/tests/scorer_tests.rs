//! Scorer Tests
//!
//! Behavioural properties of the lexicon scoring path on whole texts.

use crate::sentiment::{Emotion, LexiconScorer, ScoredText, Sentiment, SentimentAnalyzer};

fn rank(sentiment: Sentiment) -> i8 {
    match sentiment {
        Sentiment::Negative => -1,
        Sentiment::Neutral => 0,
        Sentiment::Positive => 1,
    }
}

#[cfg(test)]
mod degenerate_input_tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_inputs_are_neutral() {
        let scorer = LexiconScorer::new();
        for text in ["", "   ", "\n\t", "ok", "!!", "https://example.com/promo"] {
            let scored = scorer.score(text);
            assert_eq!(scored, ScoredText::neutral(text), "Expected neutral default for '{}'", text);
        }
    }

    #[test]
    fn test_symbols_only_is_neutral() {
        let scored = LexiconScorer::new().score("🎉🔥👏 ### @@@");
        assert_eq!(scored.sentiment, Sentiment::Neutral);
        assert_eq!(scored.emotion, Emotion::Neutral);
        assert_eq!(scored.confidence, 50);
    }
}

#[cfg(test)]
mod polarity_tests {
    use super::*;

    #[test]
    fn test_clear_positive() {
        let scored = LexiconScorer::new().score("I love this, it is amazing");
        assert_eq!(scored.sentiment, Sentiment::Positive);
        assert_eq!(scored.emotion.polarity(), Sentiment::Positive);
        assert!(scored.confidence >= 60, "confidence was {}", scored.confidence);
    }

    #[test]
    fn test_clear_negative() {
        let scored = LexiconScorer::new().score("I hate this, it is terrible and awful");
        assert_eq!(scored.sentiment, Sentiment::Negative);
        assert_eq!(scored.emotion, Emotion::Anger);
        assert!(scored.confidence >= 70, "confidence was {}", scored.confidence);
    }

    #[test]
    fn test_negation_never_makes_text_more_positive() {
        let scorer = LexiconScorer::new();
        for word in ["good", "great", "amazing", "love", "perfect"] {
            let plain = scorer.score(word);
            let negated = scorer.score(&format!("not {}", word));
            assert!(
                rank(negated.sentiment) <= rank(plain.sentiment),
                "'not {}' scored above '{}'",
                word,
                word
            );
        }
    }

    #[test]
    fn test_intensifier_never_lowers_confidence() {
        let scorer = LexiconScorer::new();
        for word in ["great", "good", "terrible", "poor"] {
            let plain = scorer.score(word);
            let boosted = scorer.score(&format!("really {}", word));
            assert_eq!(plain.sentiment, boosted.sentiment);
            assert!(
                boosted.confidence >= plain.confidence,
                "'really {}' had lower confidence",
                word
            );
        }
    }

    #[test]
    fn test_negated_negative_stays_negative() {
        // negation flips the sign but negative words keep their magnitude
        let scored = LexiconScorer::new().score("not bad");
        assert_eq!(scored.sentiment, Sentiment::Negative);
        assert_eq!(scored.confidence, 53);
    }

    #[test]
    fn test_balanced_text_is_neutral() {
        let scored = LexiconScorer::new().score("Good product, bad box");
        assert_eq!(scored.sentiment, Sentiment::Neutral);
        assert_eq!(scored.emotion, Emotion::Neutral);
        assert_eq!(scored.confidence, 60);
    }
}

#[cfg(test)]
mod neutral_pattern_tests {
    use super::*;

    #[test]
    fn test_neutral_patterns_in_priority_order() {
        let scorer = LexiconScorer::new();
        let cases = [
            ("Anyone else using Acme? What are your thoughts?", Emotion::Curious, 65),
            ("Maybe I will try it, maybe not", Emotion::Uncertain, 60),
            ("It could be worse honestly", Emotion::Mixed, 55),
            ("Acme is trending in my feed right now.", Emotion::Neutral, 50),
        ];

        for (text, emotion, confidence) in cases {
            let scored = scorer.score(text);
            assert_eq!(scored.sentiment, Sentiment::Neutral, "for '{}'", text);
            assert_eq!(scored.emotion, emotion, "for '{}'", text);
            assert_eq!(scored.confidence, confidence, "for '{}'", text);
        }
    }

    #[test]
    fn test_question_beats_hedging() {
        let scored = LexiconScorer::new().score("Thinking about trying Acme. Any recommendations?");
        assert_eq!(scored.emotion, Emotion::Curious);
    }
}

#[cfg(test)]
mod consistency_tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Just bought the new Acme product and I'm loving it! 🎉",
        "Acme never disappoints. Quality is always top-notch!",
        "Very disappointed with Acme's service today. 😠",
        "Waiting on Acme support for 3 days now. Very frustrating!",
        "Acme's pricing is getting ridiculous. Time to switch?",
        "Product from Acme arrived damaged. Poor packaging!",
        "Not sure how I feel about Acme's new direction.",
        "I'm scared and worried the update broke everything",
        "so sad and upset, the order failed again",
        "EXTREMELY GOOD!!! absolutely perfect",
        "never ever buying again, worst purchase",
        "no",
        "average at best",
    ];

    #[test]
    fn test_every_output_is_well_formed() {
        let scorer = LexiconScorer::new();
        for text in SAMPLES {
            let scored = scorer.score(text);
            assert!(scored.confidence <= 100);
            assert!(scored.is_consistent(), "inconsistent result for '{}': {:?}", text, scored);
            assert_eq!(scored.text, *text);
        }
    }

    #[test]
    fn test_long_input_is_scored_not_rejected() {
        let text = "great ".repeat(5_000);
        let scored = LexiconScorer::new().score(&text);
        assert_eq!(scored.sentiment, Sentiment::Positive);
        assert_eq!(scored.confidence, 95);
    }

    #[tokio::test]
    async fn test_analyzer_without_backend_matches_lexicon() {
        let analyzer = SentimentAnalyzer::lexicon_only();
        for text in SAMPLES {
            assert_eq!(analyzer.score(text).await, analyzer.score_lexicon(text));
        }
    }
}
