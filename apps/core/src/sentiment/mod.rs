//! # Sentiment Module
//!
//! Scores a text into a (sentiment, emotion, confidence) triple.
//!
//! ## Components
//! - `normalize`: URL/symbol stripping and tokenization
//! - `lexicon`: static word weights, modifiers and emotion keywords
//! - `scorer`: weighted lexicon scan and decision rules
//! - `emotion`: emotion sub-classification and neutral patterns
//! - `types`: output data structure
//! - `analyzer`: main entry point with optional backend delegation

pub mod analyzer;
pub mod emotion;
pub mod lexicon;
pub mod normalize;
pub mod scorer;
pub mod types;

pub use analyzer::{BackendStatus, ScoringPath, SentimentAnalyzer};
pub use scorer::LexiconScorer;
pub use types::{Emotion, ScoredText, Sentiment};
