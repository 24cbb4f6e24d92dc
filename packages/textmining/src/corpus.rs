//! Batch-scoped corpus arena for incremental TF-IDF.
//!
//! A [`Corpus`] is constructed fresh per analysis batch, fed documents
//! through [`Corpus::add_document`], queried, then discarded. Reusing a
//! corpus across unrelated batches corrupts the document-frequency
//! statistics, so don't.

use std::collections::{HashMap, HashSet};

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::KeywordScore;

use crate::tokenize;

/// A term with its TF-IDF score within one document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermScore {
    /// The term.
    pub term: String,
    /// `TF × IDF` for the queried document.
    pub tfidf: f64,
}

/// Accumulating document store with per-document term counts and
/// corpus-wide document frequencies.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Preprocessed, stopword-filtered tokens per document.
    documents: Vec<Vec<String>>,
    /// Per-document term occurrence counts.
    term_counts: Vec<HashMap<String, usize>>,
    /// Number of documents each term appears in.
    document_frequency: HashMap<String, usize>,
}

impl Corpus {
    /// Creates an empty corpus for one analysis batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Preprocesses and appends a document, updating running document
    /// frequencies. Returns the new document's index.
    ///
    /// Pipeline: lowercase, strip URLs/mentions, unwrap hashtags,
    /// TF-IDF tokenization, English stopword removal (multilingual
    /// stopword removal is a known gap; see DESIGN.md).
    pub fn add_document(&mut self, text: &str, lexicon: &Lexicon) -> usize {
        let normalized = tokenize::preprocess(text);
        let tokens: Vec<String> = tokenize::tokenize_for_tfidf(&normalized)
            .into_iter()
            .filter(|t| !lexicon.is_stopword(t))
            .collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }

        let unique: HashSet<&String> = counts.keys().collect();
        for term in unique {
            *self.document_frequency.entry(term.clone()).or_insert(0) += 1;
        }

        self.documents.push(tokens);
        self.term_counts.push(counts);
        self.documents.len() - 1
    }

    /// TF-IDF score for one term in one document, or `None` if the
    /// document index is out of range or the term is absent from it.
    ///
    /// `TF = count_in_doc / doc_len`; `IDF = ln(total_docs / df)`.
    /// `df ≥ 1` always holds here since the term must appear in the
    /// queried document itself.
    #[must_use]
    pub fn tfidf(&self, doc_index: usize, term: &str) -> Option<f64> {
        let counts = self.term_counts.get(doc_index)?;
        let count = *counts.get(term)?;
        let doc_len = self.documents[doc_index].len();
        if doc_len == 0 {
            return None;
        }

        let df = *self.document_frequency.get(term)?;

        #[allow(clippy::cast_precision_loss)]
        let tf = count as f64 / doc_len as f64;
        #[allow(clippy::cast_precision_loss)]
        let idf = (self.documents.len() as f64 / df as f64).ln();

        Some(tf * idf)
    }

    /// Every term of a document scored by TF-IDF, sorted descending.
    /// Empty for out-of-range indices and empty documents.
    #[must_use]
    pub fn terms_for(&self, doc_index: usize) -> Vec<TermScore> {
        let Some(counts) = self.term_counts.get(doc_index) else {
            return Vec::new();
        };

        let mut scored: Vec<TermScore> = counts
            .keys()
            .filter_map(|term| {
                self.tfidf(doc_index, term).map(|tfidf| TermScore {
                    term: term.clone(),
                    tfidf,
                })
            })
            .collect();

        scored.sort_by(|a, b| b.tfidf.total_cmp(&a.tfidf).then(a.term.cmp(&b.term)));
        scored
    }

    /// Occurrence count of a term in a document.
    #[must_use]
    pub fn term_count(&self, doc_index: usize, term: &str) -> usize {
        self.term_counts
            .get(doc_index)
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Top corpus-level keywords: each term's TF-IDF averaged across the
    /// documents containing it, ranked descending, carrying the term's
    /// total occurrence count across the corpus.
    #[must_use]
    pub fn top_keywords(&self, limit: usize) -> Vec<KeywordScore> {
        let mut keywords: Vec<KeywordScore> = self
            .document_frequency
            .keys()
            .map(|term| {
                let mut total_score = 0.0;
                let mut containing = 0_usize;
                let mut frequency = 0_u64;

                for doc_index in 0..self.documents.len() {
                    let count = self.term_count(doc_index, term);
                    if count == 0 {
                        continue;
                    }
                    frequency += count as u64;
                    containing += 1;
                    if let Some(score) = self.tfidf(doc_index, term) {
                        total_score += score;
                    }
                }

                #[allow(clippy::cast_precision_loss)]
                let score = if containing == 0 {
                    0.0
                } else {
                    total_score / containing as f64
                };

                KeywordScore {
                    term: term.clone(),
                    score,
                    frequency,
                }
            })
            .collect();

        keywords.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.term.cmp(&b.term)));
        keywords.truncate(limit);
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shorewatch_lexicon::{Gazetteer, LocaleKeywords, SharedSignals};

    fn lexicon() -> Lexicon {
        Lexicon::from_parts(
            vec![LocaleKeywords {
                locale: "en".to_string(),
                stopwords: vec!["the".to_string(), "and".to_string()],
                ..Default::default()
            }],
            SharedSignals::default(),
            Gazetteer::default(),
        )
    }

    #[test]
    fn single_occurrence_term_matches_formula() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        // doc 0 has 3 tokens, "surge" appears once and only in doc 0.
        corpus.add_document("surge flooding harbor", &lexicon);
        corpus.add_document("storm storm warning", &lexicon);
        corpus.add_document("storm warning coast", &lexicon);

        let expected = (1.0 / 3.0) * (3.0_f64 / 1.0).ln();
        let actual = corpus.tfidf(0, "surge").unwrap();
        assert!((actual - expected).abs() < 1e-12, "got {actual}, want {expected}");
    }

    #[test]
    fn lower_document_frequency_scores_higher() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        // "wave" appears twice in doc 0 only; "storm" appears in both docs.
        corpus.add_document("wave storm wave", &lexicon);
        corpus.add_document("storm storm", &lexicon);

        let wave_in_0 = corpus.tfidf(0, "wave").unwrap();
        let storm_in_1 = corpus.tfidf(1, "storm").unwrap();
        assert!(
            wave_in_0 > storm_in_1,
            "wave {wave_in_0} should beat storm {storm_in_1}"
        );
        // "storm" appears in every document, so its IDF is ln(2/2) = 0.
        assert!(storm_in_1.abs() < 1e-12);
    }

    #[test]
    fn terms_for_sorts_descending() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        corpus.add_document("wave storm wave", &lexicon);
        corpus.add_document("storm surge", &lexicon);

        let terms = corpus.terms_for(0);
        assert_eq!(terms[0].term, "wave");
        assert!(terms.windows(2).all(|w| w[0].tfidf >= w[1].tfidf));
    }

    #[test]
    fn terms_for_out_of_range_is_empty() {
        let corpus = Corpus::new();
        assert!(corpus.terms_for(0).is_empty());
    }

    #[test]
    fn stopwords_are_removed_before_insertion() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let index = corpus.add_document("the storm and the surge", &lexicon);
        assert_eq!(corpus.term_count(index, "the"), 0);
        assert_eq!(corpus.term_count(index, "storm"), 1);
        assert_eq!(corpus.term_count(index, "surge"), 1);
    }

    #[test]
    fn urls_and_mentions_do_not_become_terms() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        let index = corpus.add_document("flooding https://t.co/xyz @coastguard", &lexicon);
        assert_eq!(corpus.term_count(index, "flooding"), 1);
        assert_eq!(corpus.terms_for(index).len(), 1);
    }

    #[test]
    fn top_keywords_averages_across_containing_documents() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        corpus.add_document("cyclone landfall tonight", &lexicon);
        corpus.add_document("cyclone warning issued", &lexicon);
        corpus.add_document("fishing boats returned", &lexicon);

        let keywords = corpus.top_keywords(20);
        let cyclone = keywords.iter().find(|k| k.term == "cyclone").unwrap();
        assert_eq!(cyclone.frequency, 2);

        let expected = (1.0 / 3.0) * (3.0_f64 / 2.0).ln();
        assert!((cyclone.score - expected).abs() < 1e-12);
    }

    #[test]
    fn top_keywords_respects_limit() {
        let lexicon = lexicon();
        let mut corpus = Corpus::new();
        corpus.add_document("one two three four five six", &lexicon);
        corpus.add_document("seven eight nine", &lexicon);
        assert_eq!(corpus.top_keywords(3).len(), 3);
    }

    #[test]
    fn empty_corpus_yields_no_keywords() {
        let corpus = Corpus::new();
        assert!(corpus.top_keywords(10).is_empty());
    }
}
