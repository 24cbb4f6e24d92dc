//! Lexicon-based sentiment scoring.
//!
//! AFINN-style: sum the valences of matched tokens, report the raw
//! score, the comparative (score per token), and which terms matched.
//! Deliberately simple; feeds the crisis scorer and the trend analyzer.

use shorewatch_lexicon::Lexicon;
use shorewatch_textmining_models::SentimentScore;

use crate::tokenize;

/// Scores one text against the sentiment lexicon.
///
/// Empty or token-free text returns [`SentimentScore::zero`].
#[must_use]
pub fn analyze(text: &str, lexicon: &Lexicon) -> SentimentScore {
    let tokens = tokenize::tokenize(text);
    if tokens.is_empty() {
        return SentimentScore::zero();
    }

    let mut score = 0.0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for token in &tokens {
        let Some(valence) = lexicon.valence(token) else {
            continue;
        };
        score += valence;
        if valence > 0.0 {
            positive.push(token.clone());
        } else if valence < 0.0 {
            negative.push(token.clone());
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let comparative = score / tokens.len() as f64;

    SentimentScore {
        score,
        comparative,
        tokens: tokens.len(),
        positive,
        negative,
    }
}
