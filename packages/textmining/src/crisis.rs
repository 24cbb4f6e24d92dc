//! Composite crisis heuristics: panic, urgency, emotion intensity, and
//! credibility.
//!
//! Every sub-score is a cheap surface signal, clipped into `[0, 1]`
//! before weighting. The panic score is a heuristic for triage, not a
//! calibrated probability.

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::{CrisisIndicators, SocialMediaPost};

use crate::{sentiment, tokenize};

/// Urgency-keyword hits are capped here before normalization.
const URGENCY_HIT_CAP: f64 = 3.0;

/// Panic score threshold used by batch alerting.
pub const PANIC_ALERT_THRESHOLD: f64 = 0.5;

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Composite panic score in `[0, 1]`. Empty content scores 0.
///
/// Weighted blend: 25% sentiment magnitude, 20% exclamation density,
/// 30% panic-keyword ratio, 15% crisis emoji, 10% capitalization.
#[must_use]
pub fn panic_score(content: &str, lexicon: &Lexicon) -> f64 {
    if content.trim().is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let char_count = content.chars().count() as f64;

    let sentiment_velocity = clamp01(sentiment::analyze(content, lexicon).comparative.abs());

    #[allow(clippy::cast_precision_loss)]
    let exclaim_density = content.chars().filter(|&c| c == '!').count() as f64 / char_count;

    let tokens = tokenize::tokenize(content);
    #[allow(clippy::cast_precision_loss)]
    let panic_ratio = tokens
        .iter()
        .filter(|t| lexicon.is_panic_keyword(t))
        .count() as f64
        / (tokens.len().max(1)) as f64;

    #[allow(clippy::cast_precision_loss)]
    let emoji_count = crisis_emoji_count(content, lexicon) as f64;

    #[allow(clippy::cast_precision_loss)]
    let capital_ratio =
        content.chars().filter(char::is_ascii_uppercase).count() as f64 / char_count;

    clamp01(
        0.25 * sentiment_velocity
            + 0.20 * clamp01(100.0 * exclaim_density)
            + 0.30 * panic_ratio
            + 0.15 * clamp01(emoji_count / 3.0)
            + 0.10 * clamp01(2.0 * capital_ratio),
    )
}

/// Ratio of urgency-keyword hits (capped at 3) to 3.
#[must_use]
pub fn urgency_score(content: &str, lexicon: &Lexicon) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let hits = tokenize::tokenize(content)
        .iter()
        .filter(|t| lexicon.is_urgency_keyword(t))
        .count() as f64;

    hits.min(URGENCY_HIT_CAP) / URGENCY_HIT_CAP
}

/// Author/engagement credibility heuristic, `[0.5, 1]`.
///
/// Starts at 0.5 and adds fixed bonuses for follower tiers (>10k,
/// >100k) and interaction-volume tiers (>100, >1000), capped at 1.0.
/// A heuristic, not a calibrated trust model.
#[must_use]
pub fn credibility_score(post: &SocialMediaPost) -> f64 {
    let mut score: f64 = 0.5;

    if post.author_follower_count > 10_000 {
        score += 0.1;
    }
    if post.author_follower_count > 100_000 {
        score += 0.1;
    }

    let interactions = post.engagement.map_or(0, |e| e.total());
    if interactions > 100 {
        score += 0.15;
    }
    if interactions > 1_000 {
        score += 0.15;
    }

    score.min(1.0)
}

/// Emoji/exclamation/caps intensity blend in `[0, 1]`.
#[must_use]
pub fn emotion_intensity(content: &str, lexicon: &Lexicon) -> f64 {
    if content.trim().is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let char_count = content.chars().count() as f64;
    #[allow(clippy::cast_precision_loss)]
    let exclaim_density = content.chars().filter(|&c| c == '!').count() as f64 / char_count;
    #[allow(clippy::cast_precision_loss)]
    let capital_ratio =
        content.chars().filter(char::is_ascii_uppercase).count() as f64 / char_count;
    #[allow(clippy::cast_precision_loss)]
    let emoji_count = crisis_emoji_count(content, lexicon) as f64;

    clamp01(
        0.4 * clamp01(emoji_count / 3.0)
            + 0.3 * clamp01(100.0 * exclaim_density)
            + 0.3 * clamp01(2.0 * capital_ratio),
    )
}

/// All four crisis indicators for one post.
#[must_use]
pub fn indicators(post: &SocialMediaPost, lexicon: &Lexicon) -> CrisisIndicators {
    CrisisIndicators {
        panic_score: panic_score(&post.content, lexicon),
        urgency_score: urgency_score(&post.content, lexicon),
        emotion_intensity: emotion_intensity(&post.content, lexicon),
        credibility_score: credibility_score(post),
    }
}

fn crisis_emoji_count(content: &str, lexicon: &Lexicon) -> usize {
    lexicon
        .crisis_emoji()
        .iter()
        .map(|emoji| content.matches(emoji.as_str()).count())
        .sum()
}
