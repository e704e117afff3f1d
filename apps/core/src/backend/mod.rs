//! # Classification Backends
//!
//! Optional external classifiers that can stand in for the lexicon scan.
//!
//! ## Components
//! - `http`: hosted text-classification endpoint over HTTP
//! - `embedding`: zero-shot classification on a local FastEmbed model
//!
//! A backend only ever answers `classify(text) -> {label, probability}`.
//! Failures are typed (`BackendError`) and handled by the analyzer, which
//! falls back to the lexicon scorer.

pub mod embedding;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::sentiment::Sentiment;

pub use embedding::EmbeddingClassifier;
pub use http::HttpClassifier;

/// Raw answer from a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Backend-specific label ("POSITIVE", "LABEL_2", ...)
    pub label: String,
    /// Probability of `label` (0.0 - 1.0)
    pub probability: f64,
}

impl Classification {
    /// Label mapped onto our sentiment space
    pub fn sentiment(&self) -> Sentiment {
        map_label(&self.label)
    }

    /// Probability as a 0-100 confidence, rejecting out-of-range values
    pub fn confidence(&self) -> Result<u8, BackendError> {
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(BackendError::Malformed(format!(
                "probability {} outside 0..=1",
                self.probability
            )));
        }
        Ok((self.probability * 100.0).round() as u8)
    }
}

/// Map a backend label onto positive / neutral / negative
///
/// Unknown labels count as negative.
pub fn map_label(label: &str) -> Sentiment {
    match label.trim().to_ascii_uppercase().as_str() {
        "POSITIVE" | "LABEL_2" => Sentiment::Positive,
        "NEUTRAL" | "LABEL_1" => Sentiment::Neutral,
        _ => Sentiment::Negative,
    }
}

/// Reasons a backend call did not produce a usable classification
#[derive(Debug, Clone, thiserror::Error)]
pub enum BackendError {
    /// The backend could not be constructed (model missing, bad config)
    #[error("Backend failed to load: {0}")]
    Load(String),
    /// The request did not complete in time
    #[error("Backend timed out after {0:?}")]
    Timeout(Duration),
    /// Transport-level failure
    #[error("Backend request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The backend answered with something we cannot use
    #[error("Malformed backend response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Malformed(err.to_string())
        } else {
            BackendError::Request(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        BackendError::Request(format!("Inference task failed: {}", err))
    }
}

/// Defines the interface for an external sentiment classifier.
///
/// Implementations must tolerate concurrent `classify` calls.
#[async_trait]
pub trait ClassificationBackend: Send + Sync + 'static {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Longest input (in characters) the backend accepts
    fn max_input_chars(&self) -> usize;

    /// One-off readiness check run at startup
    async fn warm_up(&self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Classify a single, already truncated text
    async fn classify(&self, text: &str) -> Result<Classification, BackendError>;
}
