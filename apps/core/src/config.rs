//! Runtime configuration.
//!
//! Read from `ECHOSPHERE_*` environment variables, optionally seeded from a
//! `.env` file. Values are validated once at startup.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const ENV_BACKEND: &str = "ECHOSPHERE_BACKEND";
pub const ENV_BACKEND_URL: &str = "ECHOSPHERE_BACKEND_URL";
pub const ENV_BACKEND_TOKEN: &str = "ECHOSPHERE_BACKEND_TOKEN";
pub const ENV_BACKEND_TIMEOUT_MS: &str = "ECHOSPHERE_BACKEND_TIMEOUT_MS";
pub const ENV_MAX_INPUT_CHARS: &str = "ECHOSPHERE_MAX_INPUT_CHARS";
pub const ENV_MENTION_COUNT: &str = "ECHOSPHERE_MENTION_COUNT";
pub const ENV_SCORING_CONCURRENCY: &str = "ECHOSPHERE_SCORING_CONCURRENCY";
pub const ENV_MODELS_DIR: &str = "ECHOSPHERE_MODELS_DIR";
pub const ENV_LOG_FORMAT: &str = "ECHOSPHERE_LOG_FORMAT";

const DEFAULT_BACKEND_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_MAX_INPUT_CHARS: usize = 512;
const DEFAULT_MENTION_COUNT: usize = 25;
const DEFAULT_SCORING_CONCURRENCY: usize = 8;
const DEFAULT_MODELS_DIR: &str = "data/models/embeddings";

/// Which classification backend to set up at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Lexicon scorer only
    #[default]
    None,
    /// Hosted text-classification endpoint
    Http,
    /// Local FastEmbed zero-shot classifier
    Embedding,
}

impl BackendKind {
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::None => "none",
            BackendKind::Http => "http",
            BackendKind::Embedding => "embedding",
        }
    }
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "lexicon" => Ok(BackendKind::None),
            "http" => Ok(BackendKind::Http),
            "embedding" | "fastembed" => Ok(BackendKind::Embedding),
            other => Err(AppError::Config(format!(
                "{} must be one of none, http, embedding (got '{}')",
                ENV_BACKEND, other
            ))),
        }
    }
}

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be pretty or json (got '{}')",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Validated runtime configuration
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AppConfig {
    pub backend: BackendKind,
    /// Classification endpoint, required for the http backend
    #[validate(url)]
    pub backend_url: Option<String>,
    #[serde(skip_serializing)]
    pub backend_token: Option<String>,
    /// Upper bound on one backend call, warm-up included
    #[validate(range(min = 100, max = 60000))]
    pub backend_timeout_ms: u64,
    /// Longest text forwarded to a backend
    #[validate(range(min = 16, max = 4096))]
    pub max_input_chars: usize,
    /// Mentions generated per brand analysis
    #[validate(range(min = 1, max = 500))]
    pub mention_count: usize,
    /// Mentions scored at the same time
    #[validate(range(min = 1, max = 64))]
    pub scoring_concurrency: usize,
    /// Cache directory for the embedding model
    pub models_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::None,
            backend_url: None,
            backend_token: None,
            backend_timeout_ms: DEFAULT_BACKEND_TIMEOUT_MS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            mention_count: DEFAULT_MENTION_COUNT,
            scoring_concurrency: DEFAULT_SCORING_CONCURRENCY,
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load variables from a specific env file, then read the environment
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn from_env_file(path: &Path) -> Result<Self, AppError> {
        dotenv::from_path(path)?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, applying defaults and validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            backend: parse_or(&lookup, ENV_BACKEND, defaults.backend)?,
            backend_url: lookup(ENV_BACKEND_URL),
            backend_token: lookup(ENV_BACKEND_TOKEN),
            backend_timeout_ms: parse_or(&lookup, ENV_BACKEND_TIMEOUT_MS, defaults.backend_timeout_ms)?,
            max_input_chars: parse_or(&lookup, ENV_MAX_INPUT_CHARS, defaults.max_input_chars)?,
            mention_count: parse_or(&lookup, ENV_MENTION_COUNT, defaults.mention_count)?,
            scoring_concurrency: parse_or(
                &lookup,
                ENV_SCORING_CONCURRENCY,
                defaults.scoring_concurrency,
            )?,
            models_dir: lookup(ENV_MODELS_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.models_dir),
            log_format: parse_or(&lookup, ENV_LOG_FORMAT, defaults.log_format)?,
        };

        config.validate()?;
        if config.backend == BackendKind::Http && config.backend_url.is_none() {
            return Err(AppError::Config(format!(
                "{} is required when {}=http",
                ENV_BACKEND_URL, ENV_BACKEND
            )));
        }

        Ok(config)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_millis(self.backend_timeout_ms)
    }

    /// Parsed classification endpoint
    pub fn backend_endpoint(&self) -> Result<Url, AppError> {
        let raw = self.backend_url.as_deref().ok_or_else(|| {
            AppError::Config(format!("{} is not set", ENV_BACKEND_URL))
        })?;
        Ok(Url::parse(raw)?)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", key, e))),
        None => Ok(default),
    }
}
