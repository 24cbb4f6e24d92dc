//! Per-post and batch analysis pipelines.
//!
//! Composition point for the leaf components: tokenization feeds the
//! corpus, sentiment, crisis scoring, topics, and entities; the batch
//! pipeline owns a fresh [`Corpus`] per call and assembles the
//! dashboard-facing [`CorpusAnalytics`].

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::{
    CorpusAnalytics, CrisisHotspot, KeywordScore, SocialMediaPost, TextMiningResult, Topic,
};

use crate::corpus::Corpus;
use crate::topics::TopicAssignment;
use crate::{crisis, entities, sentiment, tokenize, topics, trend};

/// Keywords reported per post and per batch.
const KEYWORD_LIMIT: usize = 10;

/// Trend window width used by the batch pipeline.
const TREND_WINDOW_HOURS: i64 = 6;

/// Analyzes one post against an accumulating batch corpus.
///
/// The post's content is inserted into `corpus` before keyword
/// extraction, so TF-IDF scores reflect the corpus as accumulated so
/// far. For whole-batch analysis prefer [`analyze_batch`], which inserts
/// every document before extracting.
pub fn analyze_post(
    post: &SocialMediaPost,
    lexicon: &Lexicon,
    corpus: &mut Corpus,
) -> TextMiningResult {
    let doc_index = corpus.add_document(&post.content, lexicon);
    build_result(post, doc_index, corpus, lexicon)
}

/// Analyzes a whole batch of posts with a fresh corpus.
///
/// Two phases: every post is inserted first, then per-post results and
/// batch aggregates are extracted, so every TF-IDF score sees the full
/// batch's document frequencies.
#[must_use]
pub fn analyze_batch(posts: &[SocialMediaPost], lexicon: &Lexicon) -> CorpusAnalytics {
    let mut corpus = Corpus::new();
    for post in posts {
        corpus.add_document(&post.content, lexicon);
    }

    let mut assignments: Vec<TopicAssignment> = Vec::new();
    let mut hotspots = Vec::new();

    for (doc_index, post) in posts.iter().enumerate() {
        let result = build_result(post, doc_index, &corpus, lexicon);

        if let Some(assignment) = topics::assign(&tokenize::tokenize(&post.content), lexicon) {
            assignments.push(assignment);
        }

        if result.crisis_indicators.panic_score >= crisis::PANIC_ALERT_THRESHOLD {
            hotspots.push(CrisisHotspot {
                post_id: post.id.clone(),
                panic_score: result.crisis_indicators.panic_score,
                locations: result.entities.locations.clone(),
                timestamp: post.timestamp,
            });
        }
    }

    hotspots.sort_by(|a, b| b.panic_score.total_cmp(&a.panic_score));

    log::debug!(
        "Batch of {} posts: {} topic assignments, {} crisis hotspots",
        posts.len(),
        assignments.len(),
        hotspots.len()
    );

    CorpusAnalytics {
        global_keywords: corpus.top_keywords(KEYWORD_LIMIT),
        emerging_topics: topics::aggregate(&assignments),
        crisis_hotspots: hotspots,
        sentiment_trends: trend::trend(posts, TREND_WINDOW_HOURS, lexicon),
    }
}

/// Assembles the per-post result for an already-inserted document.
fn build_result(
    post: &SocialMediaPost,
    doc_index: usize,
    corpus: &Corpus,
    lexicon: &Lexicon,
) -> TextMiningResult {
    let keywords: Vec<KeywordScore> = corpus
        .terms_for(doc_index)
        .into_iter()
        .take(KEYWORD_LIMIT)
        .map(|scored| {
            let frequency = corpus.term_count(doc_index, &scored.term) as u64;
            KeywordScore {
                term: scored.term,
                score: scored.tfidf,
                frequency,
            }
        })
        .collect();

    let post_topics: Vec<Topic> = topics::assign(&tokenize::tokenize(&post.content), lexicon)
        .map(|assignment| {
            vec![Topic {
                id: assignment.topic_id,
                terms: assignment.matched_terms,
                weight: 1.0,
            }]
        })
        .unwrap_or_default();

    TextMiningResult {
        post_id: post.id.clone(),
        keywords,
        topics: post_topics,
        sentiment: sentiment::analyze(&post.content, lexicon),
        crisis_indicators: crisis::indicators(post, lexicon),
        entities: entities::extract(&post.content, lexicon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn lexicon() -> Lexicon {
        Lexicon::embedded()
    }

    fn post(id: &str, content: &str, hours_ago: i64) -> SocialMediaPost {
        SocialMediaPost {
            id: id.to_string(),
            content: content.to_string(),
            platform: "twitter".to_string(),
            timestamp: Utc::now() - Duration::hours(hours_ago),
            author_username: "coastal_observer".to_string(),
            author_follower_count: 2_000,
            engagement: None,
        }
    }

    #[test]
    fn emergency_post_scores_high_and_extracts_entities() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let sample = post(
            "p1",
            "EMERGENCY!!! tsunami warning near Chennai coast, evacuate now!!",
            0,
        );

        let result = analyze_post(&sample, &lexicon, &mut corpus);

        assert!(
            result.crisis_indicators.panic_score > 0.5,
            "panic {}",
            result.crisis_indicators.panic_score
        );
        assert!(result.entities.locations.contains(&"Chennai".to_string()));
        assert!(result.entities.hazard_types.contains(&"tsunami".to_string()));
        assert!(result.entities.marine_terms.contains(&"coast".to_string()));
        assert!(result.sentiment.comparative < 0.0);
        assert!(!result.topics.is_empty());
    }

    #[test]
    fn benign_post_scores_low() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let sample = post("p2", "lovely sunset over the harbor this evening", 0);

        let result = analyze_post(&sample, &lexicon, &mut corpus);

        assert!(result.crisis_indicators.panic_score < 0.2);
        assert!(result.entities.hazard_types.is_empty());
        assert!(result.topics.is_empty());
    }

    #[test]
    fn empty_post_produces_zeroed_result() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let sample = post("p3", "", 0);

        let result = analyze_post(&sample, &lexicon, &mut corpus);

        assert!(result.crisis_indicators.panic_score.abs() < f64::EPSILON);
        assert!(result.keywords.is_empty());
        assert_eq!(result.sentiment.tokens, 0);
    }

    #[test]
    fn batch_assembles_all_four_products() {
        let lexicon = lexicon();
        let posts = vec![
            post(
                "p1",
                "EMERGENCY!!! tsunami warning near Chennai coast, evacuate now!!",
                1,
            ),
            post("p2", "cyclone forming over the Bay of Bengal", 2),
            post("p3", "calm seas near Kochi, fishermen returning", 3),
        ];

        let analytics = analyze_batch(&posts, &lexicon);

        assert!(!analytics.global_keywords.is_empty());
        assert!(!analytics.emerging_topics.is_empty());
        assert!(!analytics.sentiment_trends.is_empty());

        assert_eq!(analytics.crisis_hotspots.len(), 1);
        assert_eq!(analytics.crisis_hotspots[0].post_id, "p1");
        assert!(
            analytics.crisis_hotspots[0]
                .locations
                .contains(&"Chennai".to_string())
        );
    }

    #[test]
    fn batch_of_nothing_is_empty_everywhere() {
        let analytics = analyze_batch(&[], &lexicon());
        assert!(analytics.global_keywords.is_empty());
        assert!(analytics.emerging_topics.is_empty());
        assert!(analytics.crisis_hotspots.is_empty());
        assert!(analytics.sentiment_trends.is_empty());
    }

    #[test]
    fn results_serialize_to_camel_case_json() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let sample = post("p1", "flood warning near Mumbai", 0);
        let result = analyze_post(&sample, &lexicon, &mut corpus);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("crisisIndicators").is_some());
        assert!(json.get("postId").is_some());
        assert!(
            json["entities"]["locations"]
                .as_array()
                .unwrap()
                .iter()
                .any(|v| v == "Mumbai")
        );
    }
}
