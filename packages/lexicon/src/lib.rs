#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Locale-keyed hazard keyword dictionaries and the marine gazetteer.
//!
//! Keyword lists, sentiment valences, and known marine locations live in
//! TOML files embedded at compile time through [`registry`]. They are
//! parsed once at startup into an immutable [`Lexicon`] that scorers and
//! extractors take by reference, keeping the algorithm code
//! language-agnostic and testable against substitute dictionaries.

pub mod registry;

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from lexicon construction.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A TOML source failed to parse.
    #[error("Failed to parse lexicon source '{name}': {source}")]
    Parse {
        /// Which embedded or supplied source failed.
        name: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Keyword lists for one locale, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleKeywords {
    /// BCP47-ish locale tag (e.g. `"en"`, `"ta"`).
    pub locale: String,
    /// Distress vocabulary counted by the panic-keyword ratio.
    #[serde(default)]
    pub panic_keywords: Vec<String>,
    /// Vocabulary counted by the urgency score.
    #[serde(default)]
    pub urgency_keywords: Vec<String>,
    /// Ocean-hazard vocabulary for topic bucketing and entity extraction.
    #[serde(default)]
    pub hazard_terms: Vec<String>,
    /// General marine vocabulary for entity extraction.
    #[serde(default)]
    pub marine_terms: Vec<String>,
    /// Temporal expressions for entity extraction.
    #[serde(default)]
    pub time_references: Vec<String>,
    /// Stopwords removed before TF-IDF insertion. Only the English list
    /// is populated today; see DESIGN.md.
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// AFINN-style term valences in `[-5, 5]`.
    #[serde(default)]
    pub sentiment: BTreeMap<String, f64>,
}

/// Language-independent signal characters, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharedSignals {
    /// Emoji counted by the crisis-emoji factor of the panic score.
    #[serde(default)]
    pub crisis_emoji: Vec<String>,
}

/// One known marine location in the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineLocation {
    /// Display name; matched as a case-insensitive substring.
    pub name: String,
    /// Administrative or oceanic region.
    pub region: String,
    /// Representative latitude.
    pub latitude: f64,
    /// Representative longitude.
    pub longitude: f64,
    /// Location kind (e.g. `"port"`, `"beach"`, `"sea"`).
    pub kind: String,
}

/// Gazetteer TOML schema wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gazetteer {
    /// All known marine locations.
    #[serde(default)]
    pub locations: Vec<MarineLocation>,
}

/// Immutable, merged view over every loaded locale plus the gazetteer.
///
/// Construct once (usually via [`Lexicon::embedded`]) and share by
/// reference; all lookups are case-normalized at build time.
#[derive(Debug, Clone)]
pub struct Lexicon {
    locales: Vec<LocaleKeywords>,
    panic_keywords: HashSet<String>,
    urgency_keywords: HashSet<String>,
    hazard_terms: Vec<String>,
    marine_terms: Vec<String>,
    time_references: Vec<String>,
    stopwords: HashSet<String>,
    sentiment: HashMap<String, f64>,
    crisis_emoji: Vec<String>,
    gazetteer: Vec<MarineLocation>,
}

impl Lexicon {
    /// Builds a lexicon from already-parsed parts. Primarily for tests
    /// that substitute small dictionaries.
    #[must_use]
    pub fn from_parts(
        locales: Vec<LocaleKeywords>,
        shared: SharedSignals,
        gazetteer: Gazetteer,
    ) -> Self {
        let mut panic_keywords = HashSet::new();
        let mut urgency_keywords = HashSet::new();
        let mut hazard_terms = Vec::new();
        let mut marine_terms = Vec::new();
        let mut time_references = Vec::new();
        let mut stopwords = HashSet::new();
        let mut sentiment = HashMap::new();

        for locale in &locales {
            panic_keywords.extend(locale.panic_keywords.iter().map(|s| s.to_lowercase()));
            urgency_keywords.extend(locale.urgency_keywords.iter().map(|s| s.to_lowercase()));
            hazard_terms.extend(locale.hazard_terms.iter().map(|s| s.to_lowercase()));
            marine_terms.extend(locale.marine_terms.iter().map(|s| s.to_lowercase()));
            time_references.extend(locale.time_references.iter().map(|s| s.to_lowercase()));
            stopwords.extend(locale.stopwords.iter().map(|s| s.to_lowercase()));
            for (term, valence) in &locale.sentiment {
                sentiment.insert(term.to_lowercase(), *valence);
            }
        }

        log::info!(
            "Loaded lexicon: {} locales, {} panic keywords, {} hazard terms, {} gazetteer entries",
            locales.len(),
            panic_keywords.len(),
            hazard_terms.len(),
            gazetteer.locations.len()
        );

        Self {
            locales,
            panic_keywords,
            urgency_keywords,
            hazard_terms,
            marine_terms,
            time_references,
            stopwords,
            sentiment,
            crisis_emoji: shared.crisis_emoji,
            gazetteer: gazetteer.locations,
        }
    }

    /// Loads the compile-time embedded dictionaries and gazetteer.
    ///
    /// # Panics
    ///
    /// Panics if any embedded TOML file fails to parse. These are
    /// compile-time constants; parse failures indicate a development
    /// error and are caught by the registry tests in CI.
    #[must_use]
    pub fn embedded() -> Self {
        registry::load_embedded()
            .unwrap_or_else(|e| panic!("Embedded lexicon sources must parse: {e}"))
    }

    /// Loaded locale definitions, in registry order.
    #[must_use]
    pub fn locales(&self) -> &[LocaleKeywords] {
        &self.locales
    }

    /// Whether a lowercased token is distress vocabulary in any locale.
    #[must_use]
    pub fn is_panic_keyword(&self, token: &str) -> bool {
        self.panic_keywords.contains(token)
    }

    /// Whether a lowercased token is urgency vocabulary in any locale.
    #[must_use]
    pub fn is_urgency_keyword(&self, token: &str) -> bool {
        self.urgency_keywords.contains(token)
    }

    /// Whether a lowercased token is a stopword.
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Merged, lowercased hazard vocabulary across locales.
    #[must_use]
    pub fn hazard_terms(&self) -> &[String] {
        &self.hazard_terms
    }

    /// Merged, lowercased marine vocabulary across locales.
    #[must_use]
    pub fn marine_terms(&self) -> &[String] {
        &self.marine_terms
    }

    /// Merged, lowercased temporal expressions across locales.
    #[must_use]
    pub fn time_references(&self) -> &[String] {
        &self.time_references
    }

    /// AFINN-style valence for a lowercased token, if listed.
    #[must_use]
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.sentiment.get(token).copied()
    }

    /// Emoji counted by the crisis-emoji panic factor.
    #[must_use]
    pub fn crisis_emoji(&self) -> &[String] {
        &self.crisis_emoji
    }

    /// All known marine locations.
    #[must_use]
    pub fn locations(&self) -> &[MarineLocation] {
        &self.gazetteer
    }
}
