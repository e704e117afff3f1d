//! Brand Monitor Tests
//!
//! Full brand reports built with the lexicon analyzer and seeded mentions.

use crate::models::{AnalysisReport, BrandRequest};
use crate::monitor::{summarize, BrandMonitor};
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn monitor() -> BrandMonitor {
    BrandMonitor::new(Arc::new(SentimentAnalyzer::lexicon_only()), 8)
}

async fn report_for(brand: &str, count: usize, seed: u64) -> AnalysisReport {
    let request = BrandRequest::new(Some(brand)).expect("valid brand");
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    monitor().analyze(&request, count, now, &mut rng).await
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[tokio::test]
    async fn test_report_shape() {
        let report = report_for("Nike", 25, 1).await;

        assert_eq!(report.brand, "Nike");
        assert_eq!(report.total_mentions, 25);
        assert_eq!(report.mentions.len(), 25);
        assert!(uuid::Uuid::parse_str(&report.id).is_ok());
        assert_eq!(report.scoring.engine, "lexicon");

        let ids: Vec<usize> = report.mentions.iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_summary_matches_mentions() {
        let report = report_for("Acme", 60, 9).await;
        let summary = &report.summary;

        assert_eq!(
            summary.positive_mentions + summary.negative_mentions + summary.neutral_mentions,
            report.total_mentions
        );
        assert_eq!(summary, &summarize(&report.mentions));
        assert_eq!(summary.anger_mentions, summary.risk.anger_count);
        assert_eq!(summary.negative_mentions, summary.risk.negative_count);
        assert!((0.0..=100.0).contains(&summary.sentiment_score));
    }

    #[tokio::test]
    async fn test_mentions_are_consistently_scored() {
        let report = report_for("Acme", 100, 4).await;
        let analyzer = SentimentAnalyzer::lexicon_only();

        for mention in &report.mentions {
            let scored = mention.scored();
            assert!(scored.is_consistent());
            assert_eq!(scored, analyzer.score_lexicon(&mention.text));
        }
        assert!(report
            .mentions
            .iter()
            .any(|m| m.sentiment == Sentiment::Negative));
    }

    #[tokio::test]
    async fn test_same_seed_same_figures() {
        let a = report_for("Acme", 30, 77).await;
        let b = report_for("Acme", 30, 77).await;

        assert_ne!(a.id, b.id);
        assert_eq!(a.mentions, b.mentions);
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.insights, b.insights);
    }

    #[tokio::test]
    async fn test_insights_are_present() {
        let report = report_for("Apple", 40, 12).await;
        assert!(report.insights.len() >= 2);
        assert!(report.insights[0].contains("Apple"));
        assert!(report
            .insights
            .last()
            .is_some_and(|line| line.starts_with("Risk is")));
    }

    #[tokio::test]
    async fn test_report_serializes_lowercase_labels() {
        let report = report_for("Acme", 5, 3).await;
        let json = serde_json::to_value(&report).unwrap();

        let sentiment = json["mentions"][0]["sentiment"].as_str().unwrap();
        assert!(["positive", "negative", "neutral"].contains(&sentiment));
        let tier = json["summary"]["risk"]["tier"].as_str().unwrap();
        assert!(["low", "medium", "high"].contains(&tier));
    }
}
