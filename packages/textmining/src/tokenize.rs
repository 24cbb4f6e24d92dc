//! Script-aware tokenization and social-media preprocessing.
//!
//! Two tokenizers coexist on purpose. [`tokenize`] keeps short tokens
//! ("sos", "now") for crisis and sentiment scoring; [`tokenize_for_tfidf`]
//! requires length > 2 and strips more aggressively to suppress noise in
//! keyword extraction.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").expect("valid regex"));

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid regex"));

/// Returns `true` for characters preserved by tokenization: ASCII word
/// characters plus the Devanagari (U+0900–097F), Bengali (U+0980–09FF),
/// and Tamil (U+0B80–0BFF) blocks.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || ('\u{0900}'..='\u{097F}').contains(&c)
        || ('\u{0980}'..='\u{09FF}').contains(&c)
        || ('\u{0B80}'..='\u{0BFF}').contains(&c)
}

/// Lowercases and splits text into tokens, replacing every character
/// outside the preserved classes with whitespace. Empty or
/// whitespace-only text yields an empty vec. Short tokens survive.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if is_token_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

/// TF-IDF tokenizer: like [`tokenize`] but drops underscores and any
/// token of two characters or fewer.
#[must_use]
pub fn tokenize_for_tfidf(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if (is_token_char(c) && c != '_') || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(ToString::to_string)
        .collect()
}

/// Normalizes social-media text before TF-IDF insertion.
///
/// Lowercase, strip URLs, strip `@mentions`, unwrap `#hashtag` to
/// `hashtag`, collapse whitespace.
#[must_use]
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_urls = URL_RE.replace_all(&lowered, " ");
    let no_mentions = MENTION_RE.replace_all(&no_urls, " ");
    let unwrapped = HASHTAG_RE.replace_all(&no_mentions, "$1");

    unwrapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
