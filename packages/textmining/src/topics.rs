//! Deterministic hazard-topic bucketing.
//!
//! A cheap surrogate for topic clustering: posts whose tokens intersect
//! the hazard vocabulary are assigned to a bucket derived from the first
//! matched term's leading character code. Semantically distinct hazards
//! can collide into one bucket by coincidence of character code; that is
//! accepted, this is not LDA.

use std::collections::BTreeMap;

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::Topic;

/// Number of topic buckets.
pub const NUM_TOPICS: usize = 8;

/// A single post's topic assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAssignment {
    /// Bucket index in `[0, NUM_TOPICS)`.
    pub topic_id: usize,
    /// Hazard terms the post's tokens matched, in token order.
    pub matched_terms: Vec<String>,
}

/// Assigns a tokenized post to a hazard-topic bucket, or `None` when no
/// token matches the hazard vocabulary.
///
/// `topic_id = char_code(first char of first matched term) % NUM_TOPICS`.
#[must_use]
pub fn assign(tokens: &[String], lexicon: &Lexicon) -> Option<TopicAssignment> {
    let matched_terms: Vec<String> = tokens
        .iter()
        .filter(|t| lexicon.hazard_terms().contains(*t))
        .cloned()
        .collect();

    let first_char = matched_terms.first()?.chars().next()?;
    Some(TopicAssignment {
        topic_id: first_char as usize % NUM_TOPICS,
        matched_terms,
    })
}

/// Merges per-post assignments into batch-level topic buckets.
///
/// Each bucket carries the union of matched terms (sorted, deduplicated)
/// and a weight equal to its share of all matched posts. Buckets come
/// back ordered by descending weight, then id.
#[must_use]
pub fn aggregate(assignments: &[TopicAssignment]) -> Vec<Topic> {
    if assignments.is_empty() {
        return Vec::new();
    }

    let mut buckets: BTreeMap<usize, (usize, Vec<String>)> = BTreeMap::new();
    for assignment in assignments {
        let entry = buckets.entry(assignment.topic_id).or_default();
        entry.0 += 1;
        for term in &assignment.matched_terms {
            if !entry.1.contains(term) {
                entry.1.push(term.clone());
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = assignments.len() as f64;

    let mut topics: Vec<Topic> = buckets
        .into_iter()
        .map(|(id, (count, mut terms))| {
            terms.sort();
            #[allow(clippy::cast_precision_loss)]
            let weight = count as f64 / total;
            Topic { id, terms, weight }
        })
        .collect();

    topics.sort_by(|a, b| b.weight.total_cmp(&a.weight).then(a.id.cmp(&b.id)));
    topics
}
