//! Brand Monitor - builds a full analysis report for a brand.
//!
//! Generates mentions, scores them with the shared analyzer (a bounded number
//! at a time), then aggregates counts, risk and insights.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::insights;
use crate::mentions::{self, MentionDraft};
use crate::models::{AnalysisReport, BrandRequest, Mention, ScoreBatch, Summary};
use crate::risk;
use crate::sentiment::{ScoredText, Sentiment, SentimentAnalyzer};

/// Orchestrates mention generation, scoring and aggregation
pub struct BrandMonitor {
    analyzer: Arc<SentimentAnalyzer>,
    concurrency: usize,
}

impl BrandMonitor {
    /// `concurrency` is the number of texts scored at once, at least 1
    pub fn new(analyzer: Arc<SentimentAnalyzer>, concurrency: usize) -> Self {
        Self {
            analyzer,
            concurrency: concurrency.max(1),
        }
    }

    /// Analyzes a brand over a fresh batch of mock mentions.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated brand request.
    /// * `count` - How many mentions to generate.
    /// * `now` - Reference time for mention timestamps and the report.
    /// * `rng` - Source of randomness for the generated mentions.
    ///
    /// # Returns
    ///
    /// The complete report. Scoring never fails, so neither does this.
    #[instrument(skip(self, now, rng), fields(brand = %request.brand))]
    pub async fn analyze<R: Rng + ?Sized>(
        &self,
        request: &BrandRequest,
        count: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AnalysisReport {
        let drafts = mentions::generate(&request.brand, count, now, rng);
        let mentions = self.score_drafts(drafts).await;
        let summary = summarize(&mentions);
        let insights = insights::generate(&request.brand, &summary, &mentions);

        info!(
            total = mentions.len(),
            sentiment_score = summary.sentiment_score,
            risk_score = summary.risk.score,
            risk_tier = %summary.risk.tier,
            "Brand analysis complete"
        );

        AnalysisReport {
            id: Uuid::new_v4().to_string(),
            brand: request.brand.clone(),
            generated_at: now,
            total_mentions: mentions.len(),
            mentions,
            summary,
            insights,
            scoring: self.analyzer.status().describe(),
        }
    }

    /// Score arbitrary texts, keeping input order
    pub async fn score_texts(&self, texts: &[String]) -> Vec<ScoredText> {
        let analyzer = &self.analyzer;
        stream::iter(texts)
            .map(|text| async move { analyzer.score(text).await })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Score arbitrary texts and assess them as one batch
    pub async fn score_batch(&self, texts: &[String]) -> ScoreBatch {
        let items = self.score_texts(texts).await;
        let risk = risk::assess(&items);
        ScoreBatch { items, risk }
    }

    async fn score_drafts(&self, drafts: Vec<MentionDraft>) -> Vec<Mention> {
        let analyzer = &self.analyzer;
        stream::iter(drafts.into_iter().enumerate())
            .map(|(index, draft)| async move {
                let scored = analyzer.score(&draft.text).await;
                Mention {
                    id: index + 1,
                    text: draft.text,
                    platform: draft.platform,
                    sentiment: scored.sentiment,
                    emotion: scored.emotion,
                    confidence: scored.confidence,
                    timestamp: draft.timestamp,
                    username: draft.username,
                    engagement: draft.engagement,
                    location: draft.location,
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

/// Count sentiments and assess risk over scored mentions
pub fn summarize(mentions: &[Mention]) -> Summary {
    let count = |sentiment: Sentiment| mentions.iter().filter(|m| m.sentiment == sentiment).count();
    let positive_mentions = count(Sentiment::Positive);

    let sentiment_score = if mentions.is_empty() {
        0.0
    } else {
        (positive_mentions as f64 / mentions.len() as f64 * 1000.0).round() / 10.0
    };

    let scored: Vec<ScoredText> = mentions.iter().map(Mention::scored).collect();
    let risk = risk::assess(&scored);

    Summary {
        positive_mentions,
        negative_mentions: count(Sentiment::Negative),
        neutral_mentions: count(Sentiment::Neutral),
        sentiment_score,
        anger_mentions: risk.anger_count,
        risk,
    }
}
