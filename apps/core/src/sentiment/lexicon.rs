//! Sentiment Lexicon.
//!
//! Static word tables used by the lexicon scorer: weighted positive and
//! negative words, context modifiers, emotion keyword sets and the phrase
//! lists of the neutral-pattern fallback. Built once on first use and
//! never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::Emotion;

/// Positive words and their intensity
const POSITIVE_WORDS: &[(&str, u32)] = &[
    ("love", 3),
    ("amazing", 3),
    ("great", 2),
    ("excellent", 3),
    ("awesome", 2),
    ("best", 2),
    ("perfect", 3),
    ("outstanding", 3),
    ("good", 1),
    ("nice", 1),
    ("happy", 2),
    ("fantastic", 2),
    ("brilliant", 2),
    ("superb", 2),
    ("wonderful", 2),
    ("recommend", 2),
    ("impressed", 2),
    ("pleased", 1),
    ("satisfied", 1),
    ("excited", 2),
    ("stellar", 3),
    ("phenomenal", 3),
    ("exceptional", 3),
    ("loving", 3),
    ("adore", 3),
    ("beautiful", 2),
    ("thrilled", 3),
    ("worth", 1),
];

/// Negative words and their intensity
const NEGATIVE_WORDS: &[(&str, u32)] = &[
    ("hate", 3),
    ("terrible", 3),
    ("awful", 3),
    ("worst", 3),
    ("disappointed", 2),
    ("bad", 1),
    ("poor", 2),
    ("horrible", 3),
    ("angry", 2),
    ("frustrating", 2),
    ("frustrated", 2),
    ("waste", 2),
    ("useless", 2),
    ("broken", 2),
    ("failed", 2),
    ("rubbish", 2),
    ("avoid", 2),
    ("complaint", 2),
    ("issue", 1),
    ("problem", 1),
    ("disgusting", 3),
    ("appalling", 3),
    ("unacceptable", 3),
    ("dreadful", 3),
    ("furious", 3),
    ("damaged", 2),
    ("ridiculous", 2),
    ("annoyed", 2),
];

/// Words that scale the next scored word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.3),
    ("extremely", 2.0),
    ("incredibly", 1.8),
    ("absolutely", 1.6),
    ("highly", 1.5),
    ("totally", 1.4),
    ("super", 1.4),
];

/// Words that flip the sign of the next scored word
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't",
    "isnt", "wasn't", "wasnt", "aren't", "arent", "won't", "wont", "can't", "cant", "cannot",
    "hardly",
];

/// Multiplier marking a negation
pub const NEGATION_FACTOR: f64 = -1.0;

/// Emotion keyword sets for positive texts, in priority order
pub const POSITIVE_EMOTIONS: &[(Emotion, &[&str])] = &[
    (Emotion::Excitement, &["excited", "thrilled", "amazing", "wow"]),
    (Emotion::Love, &["love", "adore", "beautiful", "perfect"]),
    (Emotion::Joy, &["happy", "pleased", "satisfied"]),
];

/// Emotion keyword sets for negative texts, in priority order
pub const NEGATIVE_EMOTIONS: &[(Emotion, &[&str])] = &[
    (Emotion::Anger, &["angry", "furious", "outraged", "hate"]),
    (Emotion::Frustration, &["frustrated", "annoyed", "disappointed"]),
    (Emotion::Sadness, &["sad", "upset", "unhappy", "depressed"]),
    (Emotion::Fear, &["scared", "worried", "anxious", "nervous"]),
];

/// Question words that mark an interrogative text
pub const INTERROGATIVE_WORDS: &[&str] = &["how", "what", "when", "where", "why"];

/// Phrases that mark a hedging text
pub const HEDGING_PHRASES: &[&str] = &["not sure", "maybe", "perhaps", "possibly", "thinking about"];

/// Phrases that mark a mixed-feeling text
pub const MIXED_PHRASES: &[&str] = &["not bad", "could be worse", "so so", "average"];

/// A context modifier attached to a token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    /// Scales the next scored word
    Intensifier(f64),
    /// Flips the sign of the next scored word
    Negation,
}

impl Modifier {
    pub fn factor(&self) -> f64 {
        match self {
            Modifier::Intensifier(factor) => *factor,
            Modifier::Negation => NEGATION_FACTOR,
        }
    }
}

/// Polarity of a lexicon hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive(u32),
    Negative(u32),
}

/// Read-only lexicon tables
pub struct Lexicon {
    positive: HashMap<&'static str, u32>,
    negative: HashMap<&'static str, u32>,
    modifiers: HashMap<&'static str, Modifier>,
}

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

impl Lexicon {
    /// Shared lexicon built from the static tables
    pub fn shared() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    fn build() -> Self {
        let positive = POSITIVE_WORDS.iter().copied().collect();
        let negative = NEGATIVE_WORDS.iter().copied().collect();

        let mut modifiers: HashMap<&'static str, Modifier> = INTENSIFIERS
            .iter()
            .map(|(word, factor)| (*word, Modifier::Intensifier(*factor)))
            .collect();
        for word in NEGATIONS {
            modifiers.insert(*word, Modifier::Negation);
        }

        Self {
            positive,
            negative,
            modifiers,
        }
    }

    /// Look up a lowercase token in the word tables
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if let Some(&weight) = self.positive.get(word) {
            return Some(Polarity::Positive(weight));
        }
        self.negative.get(word).map(|&weight| Polarity::Negative(weight))
    }

    /// Look up a lowercase token in the modifier tables
    pub fn modifier(&self, word: &str) -> Option<Modifier> {
        self.modifiers.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tables_do_not_overlap() {
        let lexicon = Lexicon::shared();
        for (word, _) in POSITIVE_WORDS {
            assert!(!lexicon.negative.contains_key(word), "'{}' is in both tables", word);
        }
    }

    #[test]
    fn test_lookups() {
        let lexicon = Lexicon::shared();
        assert_eq!(lexicon.polarity("love"), Some(Polarity::Positive(3)));
        assert_eq!(lexicon.polarity("bad"), Some(Polarity::Negative(1)));
        assert_eq!(lexicon.polarity("table"), None);
        assert_eq!(lexicon.polarity("quality"), None);
        assert_eq!(lexicon.modifier("very"), Some(Modifier::Intensifier(1.5)));
        assert_eq!(lexicon.modifier("really"), Some(Modifier::Intensifier(1.3)));
        assert_eq!(lexicon.modifier("not"), Some(Modifier::Negation));
        assert_eq!(Modifier::Negation.factor(), -1.0);
    }

    #[test]
    fn test_modifiers_are_not_scored_words() {
        let lexicon = Lexicon::shared();
        for word in NEGATIONS {
            assert!(lexicon.polarity(word).is_none());
        }
        for (word, _) in INTENSIFIERS {
            assert!(lexicon.polarity(word).is_none());
        }
    }
}
