use thiserror::Error;

/// Application-wide error type for everything outside the scoring core.
///
/// Scoring itself never fails; backend failures are handled by the analyzer
/// and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents data validation errors (e.g., an empty brand name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents failures of the runtime itself (e.g., logging already initialized).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(err: dotenv::Error) -> Self {
        AppError::Config(format!("Env file error: {}", err))
    }
}
