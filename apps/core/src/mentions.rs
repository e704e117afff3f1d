//! Mock mention generator.
//!
//! Produces realistic-looking social posts about a brand. Each post is
//! written in a positive, negative or neutral tone, but its sentiment is left
//! to the analyzer, so the generated tone is only a hint.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::Platform;

/// Posts are spread over this many hours before `now`
const WINDOW_HOURS: i64 = 48;
const MIN_ENGAGEMENT: u32 = 5;
const MAX_ENGAGEMENT: u32 = 2500;

const LOCATIONS: &[&str] = &[
    "New York",
    "London",
    "Mumbai",
    "Tokyo",
    "Sydney",
    "Berlin",
    "San Francisco",
];

// `{brand}` is replaced with the brand name
const POSITIVE_TEMPLATES: &[&str] = &[
    "Just bought the new {brand} product and I'm loving it! 🎉",
    "{brand} never disappoints. Quality is always top-notch!",
    "Big fan of {brand}'s customer service. They really care!",
    "The {brand} team is doing amazing work. Keep it up! 👏",
    "Just tried {brand} for the first time - blown away by the quality!",
    "{brand}'s new feature is a game-changer! 🔥",
    "Shoutout to {brand} for their excellent support team!",
    "Been using {brand} for months now - absolutely worth it!",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
    "Very disappointed with {brand}'s service today. 😠",
    "{brand} product stopped working after just 2 weeks. Poor quality!",
    "Waiting on {brand} support for 3 days now. Very frustrating!",
    "{brand}'s pricing is getting ridiculous. Time to switch?",
    "Had a terrible experience with {brand} customer service.",
    "{brand} promised features that don't work as advertised.",
    "Product from {brand} arrived damaged. Poor packaging!",
    "{brand} needs to improve their quality control. 😞",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Just saw {brand} mentioned in the news today.",
    "Anyone else using {brand}? What are your thoughts?",
    "Thinking about trying {brand}. Any recommendations?",
    "{brand} is trending in my feed right now.",
    "Interesting discussion about {brand} on the forum.",
    "Read an article about {brand}'s market strategy.",
    "Not sure how I feel about {brand}'s new direction.",
    "{brand} seems to be expanding to new markets.",
];

/// Tone a post is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    const ALL: [Tone; 3] = [Tone::Positive, Tone::Negative, Tone::Neutral];

    fn templates(&self) -> &'static [&'static str] {
        match self {
            Tone::Positive => POSITIVE_TEMPLATES,
            Tone::Negative => NEGATIVE_TEMPLATES,
            Tone::Neutral => NEUTRAL_TEMPLATES,
        }
    }
}

/// A generated post that has not been scored yet
#[derive(Debug, Clone, PartialEq)]
pub struct MentionDraft {
    pub text: String,
    pub tone: Tone,
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub engagement: u32,
    pub location: String,
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Generate `count` posts about `brand`, all dated within 48 hours of `now`
pub fn generate<R: Rng + ?Sized>(
    brand: &str,
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<MentionDraft> {
    (0..count)
        .map(|_| {
            let tone = *pick(&Tone::ALL, rng);
            let template = pick(tone.templates(), rng);
            let minutes_ago = rng.gen_range(0..=WINDOW_HOURS * 60);

            MentionDraft {
                text: template.replace("{brand}", brand),
                tone,
                platform: *pick(&Platform::ALL, rng),
                timestamp: now - Duration::minutes(minutes_ago),
                username: format!("user_{}", rng.gen_range(1000..=9999)),
                engagement: rng.gen_range(MIN_ENGAGEMENT..=MAX_ENGAGEMENT),
                location: pick(LOCATIONS, rng).to_string(),
            }
        })
        .collect()
}
