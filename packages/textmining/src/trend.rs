//! Rolling sentiment trend over fixed-width time windows.

use chrono::{DateTime, Duration, Utc};
use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::{SentimentWindow, SocialMediaPost};

use crate::sentiment;

/// Number of trailing windows reported.
const WINDOW_COUNT: i64 = 7;

/// Sentiment trend over the 7 most recent fixed-width windows ending at
/// the current instant. Chronological order; empty windows are omitted.
#[must_use]
pub fn trend(posts: &[SocialMediaPost], window_hours: i64, lexicon: &Lexicon) -> Vec<SentimentWindow> {
    trend_at(posts, window_hours, lexicon, Utc::now())
}

/// [`trend`] with an explicit reference instant, for deterministic tests
/// and replays.
///
/// Window `k` (k = 6..0) spans `[now - (k+1)·w, now - k·w)`; the newest
/// window ends at `now`. `volatility` is the population standard
/// deviation of per-post comparative sentiment inside the window.
#[must_use]
pub fn trend_at(
    posts: &[SocialMediaPost],
    window_hours: i64,
    lexicon: &Lexicon,
    now: DateTime<Utc>,
) -> Vec<SentimentWindow> {
    if posts.is_empty() || window_hours <= 0 {
        return Vec::new();
    }

    let width = Duration::hours(window_hours);
    let mut windows = Vec::new();

    for k in (0..WINDOW_COUNT).rev() {
        let end = now - width * i32::try_from(k).unwrap_or(0);
        let start = end - width;

        let comparatives: Vec<f64> = posts
            .iter()
            .filter(|p| p.timestamp >= start && p.timestamp < end)
            .map(|p| sentiment::analyze(&p.content, lexicon).comparative)
            .collect();

        if comparatives.is_empty() {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = comparatives.len() as f64;
        let avg = comparatives.iter().sum::<f64>() / count;
        let variance = comparatives
            .iter()
            .map(|c| (c - avg).powi(2))
            .sum::<f64>()
            / count;

        windows.push(SentimentWindow {
            window_label: start.format("%Y-%m-%d %H:%M").to_string(),
            start,
            end,
            post_count: comparatives.len(),
            avg_sentiment: avg,
            volatility: variance.sqrt(),
        });
    }

    log::debug!(
        "Sentiment trend: {} populated of {WINDOW_COUNT} windows ({window_hours}h wide)",
        windows.len()
    );

    windows
}
