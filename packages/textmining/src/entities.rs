//! Entity extraction by dictionary and gazetteer matching.
//!
//! Case-insensitive substring matching only: no fuzzy matching and no
//! disambiguation of same-named places. Multiword vocabulary entries
//! ("oil spill", "right now") match through the substring scan, which is
//! why extraction works on raw content rather than tokens.

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::EntityMentions;

/// Extracts locations, hazard types, marine terms, and time references
/// from one post's content.
#[must_use]
pub fn extract(content: &str, lexicon: &Lexicon) -> EntityMentions {
    if content.trim().is_empty() {
        return EntityMentions::default();
    }

    let lowered = content.to_lowercase();

    let locations = lexicon
        .locations()
        .iter()
        .filter(|loc| lowered.contains(&loc.name.to_lowercase()))
        .map(|loc| loc.name.clone())
        .collect();

    EntityMentions {
        locations,
        hazard_types: matching_terms(&lowered, lexicon.hazard_terms()),
        marine_terms: matching_terms(&lowered, lexicon.marine_terms()),
        time_references: matching_terms(&lowered, lexicon.time_references()),
    }
}

/// Vocabulary entries appearing as substrings of the lowercased content.
fn matching_terms(lowered: &str, vocabulary: &[String]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .cloned()
        .collect()
}
