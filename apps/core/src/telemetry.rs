//! Logging setup.
//!
//! Logs always go to stderr so stdout carries only command output.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const APP_NAME: &str = "echosphere";

/// `RUST_LOG` wins; otherwise `default_level` for everything
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber
pub fn init(format: LogFormat, default_level: &str) -> Result<(), AppError> {
    let filter = env_filter(default_level);

    let result = match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .finish()
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // whichever test installs first wins; the second attempt must fail cleanly
        let _ = init(LogFormat::Json, "info");
        assert!(matches!(init(LogFormat::Pretty, "info"), Err(AppError::Internal(_))));
    }
}
