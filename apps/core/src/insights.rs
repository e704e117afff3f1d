//! Rule-based insights for a brand report.

use std::collections::HashMap;

use crate::models::{Mention, Platform, Summary};
use crate::risk::RiskTier;
use crate::sentiment::{Emotion, Sentiment};

const FAVOURABLE_SHARE: f64 = 60.0;
const UNFAVOURABLE_SHARE: f64 = 30.0;

/// Summarize a scored batch of mentions as short human-readable lines
pub fn generate(brand: &str, summary: &Summary, mentions: &[Mention]) -> Vec<String> {
    if mentions.is_empty() {
        return vec![format!("No mentions of {} were found.", brand)];
    }

    let mut insights = vec![overall_tone(brand, summary)];

    if let Some((emotion, count)) = dominant_emotion(mentions) {
        insights.push(format!(
            "Most common emotion is {} ({} of {} mentions).",
            emotion,
            count,
            mentions.len()
        ));
    }

    if let Some((platform, engagement, count)) = loudest_negative_platform(mentions) {
        insights.push(format!(
            "Negative conversation is loudest on {} ({} engagements across {} mentions).",
            platform, engagement, count
        ));
    }

    insights.push(recommendation(summary.risk.tier).to_string());
    insights
}

fn overall_tone(brand: &str, summary: &Summary) -> String {
    let share = summary.sentiment_score;
    if share >= FAVOURABLE_SHARE {
        format!("Sentiment towards {} is favourable: {}% of mentions are positive.", brand, share)
    } else if share <= UNFAVOURABLE_SHARE || summary.negative_mentions > summary.positive_mentions {
        format!("Sentiment towards {} is unfavourable: only {}% of mentions are positive.", brand, share)
    } else {
        format!("Sentiment towards {} is mixed: {}% of mentions are positive.", brand, share)
    }
}

/// Most frequent emotion; ties go to the alphabetically first label
fn dominant_emotion(mentions: &[Mention]) -> Option<(Emotion, usize)> {
    let mut counts: HashMap<Emotion, usize> = HashMap::new();
    for mention in mentions {
        *counts.entry(mention.emotion).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| {
            a_count.cmp(b_count).then_with(|| b.label().cmp(a.label()))
        })
}

/// Platform with the most engagement on negative mentions
fn loudest_negative_platform(mentions: &[Mention]) -> Option<(Platform, u64, usize)> {
    Platform::ALL
        .iter()
        .filter_map(|platform| {
            let negatives: Vec<&Mention> = mentions
                .iter()
                .filter(|m| m.platform == *platform && m.sentiment == Sentiment::Negative)
                .collect();
            if negatives.is_empty() {
                return None;
            }
            let engagement = negatives.iter().map(|m| u64::from(m.engagement)).sum();
            Some((*platform, engagement, negatives.len()))
        })
        // rev so that ties keep the earlier platform
        .rev()
        .max_by_key(|(_, engagement, _)| *engagement)
}

fn recommendation(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => {
            "Risk is high: respond publicly to angry mentions and escalate recurring complaints to support."
        }
        RiskTier::Medium => {
            "Risk is medium: keep an eye on negative threads and follow up on repeated issues."
        }
        RiskTier::Low => "Risk is low: keep engaging with positive mentions to build on the goodwill.",
    }
}
