// Echosphere Core Entry Point
// Brand mention monitoring: sentiment, emotion and risk scoring

mod backend;
mod competitors;
mod config;
mod error;
mod insights;
mod mentions;
mod models;
mod monitor;
mod risk;
mod sentiment;
mod telemetry;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use config::AppConfig;
use models::{BrandRequest, HealthStatus};
use monitor::BrandMonitor;
use sentiment::SentimentAnalyzer;

/// Echosphere - brand mention sentiment and risk monitor
#[derive(Parser, Debug)]
#[command(name = "echosphere", version, about, long_about = None)]
struct Cli {
    /// Env file to load before reading ECHOSPHERE_* variables (default: ./.env if present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and score mentions for a brand, then report risk and insights
    Analyze {
        /// Brand to analyze (default: "Unknown Brand")
        #[arg(short, long)]
        brand: Option<String>,

        /// Number of mentions (overrides ECHOSPHERE_MENTION_COUNT)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..=500))]
        count: Option<u16>,

        /// Seed for reproducible mentions
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Score one or more texts and assess them together
    Score {
        /// Texts to score
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Compare a brand with its usual competitors
    Competitors {
        #[arg(short, long)]
        brand: Option<String>,

        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Report version and which scoring path is active
    Health,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.env_file {
        Some(path) => AppConfig::from_env_file(path),
        None => AppConfig::from_env(),
    }
    .context("Invalid configuration")?;

    telemetry::init(config.log_format, &cli.log_level)?;
    debug!(
        backend = config.backend.label(),
        mention_count = config.mention_count,
        concurrency = config.scoring_concurrency,
        "Configuration loaded"
    );

    match cli.command {
        Command::Analyze { brand, count, seed } => {
            let request = BrandRequest::new(brand.as_deref())?;
            let count = count.map(usize::from).unwrap_or(config.mention_count);

            let analyzer = Arc::new(SentimentAnalyzer::initialize(&config).await);
            let monitor = BrandMonitor::new(analyzer, config.scoring_concurrency);

            info!("Analyzing brand: {}", request.brand);
            let mut rng = rng_from(seed);
            let report = monitor.analyze(&request, count, Utc::now(), &mut rng).await;
            print_json(&report)?;
        }
        Command::Score { texts } => {
            let analyzer = Arc::new(SentimentAnalyzer::initialize(&config).await);
            let monitor = BrandMonitor::new(analyzer, config.scoring_concurrency);
            print_json(&monitor.score_batch(&texts).await)?;
        }
        Command::Competitors { brand, seed } => {
            let request = BrandRequest::new(brand.as_deref())?;
            let mut rng = rng_from(seed);
            print_json(&competitors::compare(&request.brand, &mut rng))?;
        }
        Command::Health => {
            let analyzer = SentimentAnalyzer::initialize(&config).await;
            print_json(&HealthStatus::new(config.backend, analyzer.status()))?;
        }
    }

    Ok(())
}
