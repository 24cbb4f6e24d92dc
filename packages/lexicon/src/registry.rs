//! Compile-time registry of embedded lexicon sources.
//!
//! Each entry is a `(name, toml_content)` pair embedded via
//! `include_str!`. Adding a language requires creating a TOML file in
//! `locales/` and a corresponding entry here.

use crate::{Gazetteer, LocaleKeywords, Lexicon, LexiconError, SharedSignals};

/// Number of registered locales. Updated when new languages are added.
/// Enforced by a test.
#[cfg(test)]
const EXPECTED_LOCALE_COUNT: usize = 4;

/// Embedded per-locale keyword definitions.
const LOCALE_TOMLS: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.toml")),
    ("hi", include_str!("../locales/hi.toml")),
    ("ta", include_str!("../locales/ta.toml")),
    ("bn", include_str!("../locales/bn.toml")),
];

/// Embedded language-independent signal characters.
const SHARED_TOML: &str = include_str!("../shared.toml");

/// Embedded marine location gazetteer.
const GAZETTEER_TOML: &str = include_str!("../gazetteer.toml");

/// Parses every embedded source into a merged [`Lexicon`].
///
/// # Errors
///
/// Returns [`LexiconError::Parse`] if any embedded TOML fails to parse.
pub fn load_embedded() -> Result<Lexicon, LexiconError> {
    let locales = LOCALE_TOMLS
        .iter()
        .map(|(name, content)| parse::<LocaleKeywords>(name, content))
        .collect::<Result<Vec<_>, _>>()?;

    let shared = parse::<SharedSignals>("shared", SHARED_TOML)?;
    let gazetteer = parse::<Gazetteer>("gazetteer", GAZETTEER_TOML)?;

    Ok(Lexicon::from_parts(locales, shared, gazetteer))
}

fn parse<T: serde::de::DeserializeOwned>(name: &str, content: &str) -> Result<T, LexiconError> {
    toml::de::from_str(content).map_err(|source| LexiconError::Parse {
        name: name.to_string(),
        source,
    })
}
