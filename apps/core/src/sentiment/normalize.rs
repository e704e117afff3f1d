//! Text normalization for scoring.
//!
//! Strips URLs and stray symbols, collapses whitespace and produces the
//! lowercase token stream the lexicon scorer works on.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() on constant patterns, a failure is a programming error
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z][a-z0-9+.\-]*://\S+").expect("Invalid regex: URL pattern")
});

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s'?!.,\-]").expect("Invalid regex: disallowed characters")
});

/// Minimum number of significant characters worth scoring
pub const MIN_SIGNIFICANT_CHARS: usize = 3;

/// Normalized view of an input text
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// Cleaned text with original casing, used for backend calls
    pub cased: String,
    /// Lowercase copy used for all matching
    pub lowercase: String,
    /// Lowercase tokens with punctuation trimmed from their edges
    pub tokens: Vec<String>,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        let without_urls = URL_PATTERN.replace_all(text, " ");
        let cleaned = DISALLOWED_CHARS.replace_all(&without_urls, " ");
        let cased = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
        let lowercase = cased.to_lowercase();

        let tokens = lowercase
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            cased,
            lowercase,
            tokens,
        }
    }

    /// Number of non-whitespace characters left after cleaning
    pub fn significant_len(&self) -> usize {
        self.cased.chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Too little left to say anything about
    pub fn is_degenerate(&self) -> bool {
        self.significant_len() < MIN_SIGNIFICANT_CHARS
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.iter().any(|token| token == word)
    }

    /// Whole-word phrase match ("so so" does not match "so sorry")
    pub fn has_phrase(&self, phrase: &str) -> bool {
        let padded = format!(" {} ", self.tokens.join(" "));
        padded.contains(&format!(" {} ", phrase))
    }
}

/// Cut `text` to at most `max_chars` characters on a char boundary
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
