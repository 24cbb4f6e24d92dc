#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Social-media post inputs and text-mining result types.
//!
//! Inputs arrive from out-of-scope ingestion collaborators; results are
//! JSON-serialized for dashboards and alerting. All analysis lives in
//! `shorewatch_textmining`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A social-media post about a possible coastal hazard. Read-only input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPost {
    /// Platform-scoped post identifier.
    pub id: String,
    /// Raw post text.
    pub content: String,
    /// Source platform (e.g. "twitter", "facebook").
    pub platform: String,
    /// Post creation time.
    pub timestamp: DateTime<Utc>,
    /// Author handle.
    pub author_username: String,
    /// Author follower count at capture time.
    pub author_follower_count: u64,
    /// Interaction counts, when the platform exposes them.
    pub engagement: Option<Engagement>,
}

/// Interaction counts for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    /// Like/favorite count.
    pub likes: u64,
    /// Share/retweet count.
    pub shares: u64,
    /// Reply/comment count.
    pub comments: u64,
}

impl Engagement {
    /// Total interaction volume.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.likes + self.shares + self.comments
    }
}

/// A corpus-salient term with its TF-IDF score and raw frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordScore {
    /// The term.
    pub term: String,
    /// TF-IDF score (averaged across containing documents for
    /// corpus-level keywords).
    pub score: f64,
    /// Occurrence count across the corpus.
    pub frequency: u64,
}

/// A deterministic hazard-topic bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Bucket index derived from the first matched hazard term.
    pub id: usize,
    /// Hazard terms observed in this bucket.
    pub terms: Vec<String>,
    /// Share of matched posts falling into this bucket, `[0, 1]`.
    pub weight: f64,
}

/// Lexicon-based sentiment for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    /// Sum of matched term valences.
    pub score: f64,
    /// Score divided by token count; zero for empty text.
    pub comparative: f64,
    /// Number of tokens considered.
    pub tokens: usize,
    /// Matched positive terms.
    pub positive: Vec<String>,
    /// Matched negative terms.
    pub negative: Vec<String>,
}

impl SentimentScore {
    /// All-zero score for empty or unscorable text.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            score: 0.0,
            comparative: 0.0,
            tokens: 0,
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }
}

/// Composite crisis heuristics for one post, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisIndicators {
    /// Weighted panic/crisis composite.
    pub panic_score: f64,
    /// Urgency-keyword ratio.
    pub urgency_score: f64,
    /// Emoji/exclamation/caps intensity blend.
    pub emotion_intensity: f64,
    /// Follower- and engagement-tier credibility heuristic.
    pub credibility_score: f64,
}

/// Entities recognized in a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMentions {
    /// Gazetteer location names found in the content.
    pub locations: Vec<String>,
    /// Hazard vocabulary found in the content.
    pub hazard_types: Vec<String>,
    /// Marine vocabulary found in the content.
    pub marine_terms: Vec<String>,
    /// Temporal expressions found in the content.
    pub time_references: Vec<String>,
}

/// Full per-post analysis product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMiningResult {
    /// Analyzed post id.
    pub post_id: String,
    /// Top TF-IDF terms for this post within the batch corpus.
    pub keywords: Vec<KeywordScore>,
    /// Hazard-topic buckets this post contributed to.
    pub topics: Vec<Topic>,
    /// Lexicon sentiment.
    pub sentiment: SentimentScore,
    /// Crisis heuristics.
    pub crisis_indicators: CrisisIndicators,
    /// Extracted entities.
    pub entities: EntityMentions,
}

/// One fixed-width sentiment trend window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentWindow {
    /// Window label, e.g. `"2026-08-23 06:00"`.
    pub window_label: String,
    /// Window start.
    pub start: DateTime<Utc>,
    /// Window end (exclusive).
    pub end: DateTime<Utc>,
    /// Posts in the window.
    pub post_count: usize,
    /// Mean comparative sentiment.
    pub avg_sentiment: f64,
    /// Population standard deviation of comparative sentiment.
    pub volatility: f64,
}

/// A post whose panic score crossed the alerting threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisHotspot {
    /// Post id.
    pub post_id: String,
    /// Panic score that triggered inclusion.
    pub panic_score: f64,
    /// Gazetteer locations mentioned by the post.
    pub locations: Vec<String>,
    /// Post timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Batch-level analytics over one corpus of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusAnalytics {
    /// Top corpus-wide TF-IDF keywords.
    pub global_keywords: Vec<KeywordScore>,
    /// Aggregated hazard-topic buckets.
    pub emerging_topics: Vec<Topic>,
    /// Posts exceeding the panic threshold, with locations.
    pub crisis_hotspots: Vec<CrisisHotspot>,
    /// Rolling sentiment trend windows, chronological.
    pub sentiment_trends: Vec<SentimentWindow>,
}
