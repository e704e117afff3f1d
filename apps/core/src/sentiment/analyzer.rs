//! Sentiment Analyzer - entry point for scoring texts.
//!
//! Uses a two-tier path:
//! 1. Optional classification backend (HTTP endpoint or local embeddings)
//! 2. Lexicon scorer, used when no backend is ready or a backend call fails
//!
//! The backend is probed once in `initialize` and the outcome is fixed for
//! the lifetime of the analyzer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::emotion;
use super::normalize::{truncate_chars, NormalizedText};
use super::scorer::LexiconScorer;
use super::types::ScoredText;
use crate::backend::{BackendError, ClassificationBackend, EmbeddingClassifier, HttpClassifier};
use crate::config::{AppConfig, BackendKind};

/// Outcome of the one-off backend setup
#[derive(Clone)]
pub enum BackendStatus {
    /// No backend configured, lexicon only
    Disabled,
    /// Backend configured but failed to load or warm up
    Unavailable { backend: &'static str, reason: String },
    /// Backend ready to take requests
    Ready(Arc<dyn ClassificationBackend>),
}

impl BackendStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, BackendStatus::Ready(_))
    }

    /// Short description for reports
    pub fn describe(&self) -> ScoringPath {
        match self {
            BackendStatus::Disabled => ScoringPath {
                engine: "lexicon".to_string(),
                backend: None,
                backend_error: None,
            },
            BackendStatus::Unavailable { backend, reason } => ScoringPath {
                engine: "lexicon".to_string(),
                backend: Some(backend.to_string()),
                backend_error: Some(reason.clone()),
            },
            BackendStatus::Ready(backend) => ScoringPath {
                engine: "backend".to_string(),
                backend: Some(backend.name().to_string()),
                backend_error: None,
            },
        }
    }
}

/// Which scoring path an analyzer uses, as shown to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPath {
    /// "backend" or "lexicon"
    pub engine: String,
    /// Configured backend name, if any
    pub backend: Option<String>,
    /// Why the configured backend is not in use
    pub backend_error: Option<String>,
}

/// Sentiment analyzer combining an optional backend with the lexicon scorer
pub struct SentimentAnalyzer {
    lexicon: LexiconScorer,
    backend: BackendStatus,
    backend_timeout: Duration,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::lexicon_only()
    }
}

impl SentimentAnalyzer {
    /// Analyzer that never calls a backend
    pub fn lexicon_only() -> Self {
        Self {
            lexicon: LexiconScorer::new(),
            backend: BackendStatus::Disabled,
            backend_timeout: Duration::from_secs(3),
        }
    }

    /// Analyzer around an already constructed backend
    ///
    /// Runs the warm-up under `backend_timeout`; a failed warm-up leaves the
    /// analyzer on the lexicon path for good.
    pub async fn with_backend(backend: Arc<dyn ClassificationBackend>, backend_timeout: Duration) -> Self {
        let name = backend.name();
        let status = match timeout(backend_timeout, backend.warm_up()).await {
            Ok(Ok(())) => {
                info!("Sentiment backend '{}' ready", name);
                BackendStatus::Ready(backend)
            }
            Ok(Err(e)) => {
                warn!("Sentiment backend '{}' failed warm-up: {}", name, e);
                BackendStatus::Unavailable {
                    backend: name,
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                let e = BackendError::Timeout(backend_timeout);
                warn!("Sentiment backend '{}' failed warm-up: {}", name, e);
                BackendStatus::Unavailable {
                    backend: name,
                    reason: e.to_string(),
                }
            }
        };

        Self {
            lexicon: LexiconScorer::new(),
            backend: status,
            backend_timeout,
        }
    }

    /// Build the analyzer described by `config`, attempting backend setup once
    pub async fn initialize(config: &AppConfig) -> Self {
        let backend_timeout = config.backend_timeout();

        let backend: Result<Arc<dyn ClassificationBackend>, BackendError> = match config.backend {
            BackendKind::None => {
                info!("No sentiment backend configured, using lexicon scorer");
                return Self {
                    backend_timeout,
                    ..Self::lexicon_only()
                };
            }
            BackendKind::Http => match config.backend_endpoint() {
                Ok(endpoint) => HttpClassifier::new(
                    endpoint,
                    config.backend_token.as_deref(),
                    config.max_input_chars,
                    backend_timeout,
                )
                .map(|classifier| Arc::new(classifier) as Arc<dyn ClassificationBackend>),
                Err(e) => Err(BackendError::Load(e.to_string())),
            },
            BackendKind::Embedding => {
                info!("Loading embedding backend from {:?}", config.models_dir);
                let cache_dir = config.models_dir.clone();
                match tokio::task::spawn_blocking(move || EmbeddingClassifier::load(cache_dir)).await {
                    Ok(loaded) => loaded
                        .map(|classifier| Arc::new(classifier) as Arc<dyn ClassificationBackend>),
                    Err(e) => Err(BackendError::from(e)),
                }
            }
        };

        match backend {
            Ok(backend) => Self::with_backend(backend, backend_timeout).await,
            Err(e) => {
                warn!("Sentiment backend unavailable, using lexicon scorer: {}", e);
                Self {
                    backend: BackendStatus::Unavailable {
                        backend: config.backend.label(),
                        reason: e.to_string(),
                    },
                    backend_timeout,
                    ..Self::lexicon_only()
                }
            }
        }
    }

    pub fn status(&self) -> &BackendStatus {
        &self.backend
    }

    /// Score a text, via the backend when one is ready
    ///
    /// Never fails: any backend problem falls back to the lexicon scorer.
    pub async fn score(&self, text: &str) -> ScoredText {
        let normalized = NormalizedText::new(text);

        if let BackendStatus::Ready(backend) = &self.backend {
            match self.score_with_backend(backend.as_ref(), text, &normalized).await {
                Ok(scored) => return scored,
                Err(e) => warn!(
                    "Backend '{}' failed, falling back to lexicon scorer: {}",
                    backend.name(),
                    e
                ),
            }
        }

        self.lexicon.score_normalized(text, &normalized)
    }

    /// Score a text with the lexicon scorer only
    #[cfg(test)]
    pub fn score_lexicon(&self, text: &str) -> ScoredText {
        self.lexicon.score(text)
    }

    async fn score_with_backend(
        &self,
        backend: &dyn ClassificationBackend,
        text: &str,
        normalized: &NormalizedText,
    ) -> Result<ScoredText, BackendError> {
        if normalized.is_degenerate() {
            return Ok(ScoredText::neutral(text));
        }

        let input = truncate_chars(&normalized.cased, backend.max_input_chars());
        let classification = timeout(self.backend_timeout, backend.classify(input))
            .await
            .map_err(|_| BackendError::Timeout(self.backend_timeout))??;

        let sentiment = classification.sentiment();
        let confidence = classification.confidence()?;
        let emotion = emotion::classify(normalized, sentiment);

        debug!(
            backend = backend.name(),
            label = %classification.label,
            sentiment = %sentiment,
            confidence,
            "Backend classification"
        );

        Ok(ScoredText::new(text, sentiment, emotion, confidence))
    }
}
