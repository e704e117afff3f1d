//! Competitor comparison with simulated volume and sentiment figures.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{BrandSnapshot, CompetitorAnalysis};

const MAIN_MENTIONS: RangeInclusive<u32> = 50..=200;
const MAIN_SENTIMENT: RangeInclusive<u32> = 60..=90;
const COMPETITOR_MENTIONS: RangeInclusive<u32> = 30..=150;
const COMPETITOR_SENTIMENT: RangeInclusive<u32> = 50..=85;

/// Known rivals, matched as a case-insensitive substring of the brand.
/// First match wins.
const RIVALS: &[(&str, &[&str])] = &[
    ("nike", &["Adidas", "Puma", "Reebok"]),
    ("starbucks", &["Starbucks", "Dunkin"]),
    ("apple", &["Samsung", "Google"]),
];

const GENERIC_RIVALS: &[&str] = &["Competitor A", "Competitor B"];

/// Competitors a brand is usually compared with
pub fn competitors_for(brand: &str) -> &'static [&'static str] {
    let brand = brand.to_lowercase();
    RIVALS
        .iter()
        .find(|(key, _)| brand.contains(key))
        .map(|(_, rivals)| *rivals)
        .unwrap_or(GENERIC_RIVALS)
}

/// Compare `brand` against its competitors
pub fn compare<R: Rng + ?Sized>(brand: &str, rng: &mut R) -> CompetitorAnalysis {
    let main_brand = BrandSnapshot {
        name: brand.to_string(),
        mentions: rng.gen_range(MAIN_MENTIONS),
        sentiment_score: rng.gen_range(MAIN_SENTIMENT),
    };

    let competitors = competitors_for(brand)
        .iter()
        .map(|name| BrandSnapshot {
            name: name.to_string(),
            mentions: rng.gen_range(COMPETITOR_MENTIONS),
            sentiment_score: rng.gen_range(COMPETITOR_SENTIMENT),
        })
        .collect();

    CompetitorAnalysis {
        main_brand,
        competitors,
    }
}
