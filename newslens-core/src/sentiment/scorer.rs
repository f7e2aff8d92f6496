//! Lexicon-based polarity scorer.
//!
//! Output is the mean polarity of lexicon hits in the text: +1.0 per
//! positive word, -1.0 per negative word, sign flipped when the word is
//! immediately preceded by a negator ("not strong" scores -1.0). Text with
//! no lexicon hits, including empty text, scores 0.0 (neutral).
//!
//! Deterministic: identical text always yields the identical score.

use super::lexicon::{NEGATIVE, NEGATORS, POSITIVE};
use std::collections::{HashMap, HashSet};

/// Maps raw headline text to a polarity score in [-1.0, 1.0].
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    polarity: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        let mut polarity = HashMap::with_capacity(POSITIVE.len() + NEGATIVE.len());
        for &word in POSITIVE {
            polarity.insert(word, 1.0);
        }
        for &word in NEGATIVE {
            polarity.insert(word, -1.0);
        }
        let negators = NEGATORS.iter().copied().collect();
        Self { polarity, negators }
    }

    /// Score arbitrary text. Never fails; empty or unscoreable text is 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut negate_next = false;

        for token in tokenize(text) {
            if self.negators.contains(token.as_str()) {
                negate_next = true;
                continue;
            }
            if let Some(&p) = self.polarity.get(token.as_str()) {
                total += if negate_next { -p } else { p };
                hits += 1;
            }
            negate_next = false;
        }

        if hits == 0 {
            return 0.0;
        }
        // Mean of hits is already in [-1, 1]; clamp guards rounding.
        (total / hits as f64).clamp(-1.0, 1.0)
    }
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   "), 0.0);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("company announces quarterly results"), 0.0);
    }

    #[test]
    fn positive_headline() {
        let scorer = SentimentScorer::new();
        let s = scorer.score("Shares surge as earnings beat expectations");
        assert!(s > 0.0, "expected positive, got {s}");
        assert!(s <= 1.0);
    }

    #[test]
    fn negative_headline() {
        let scorer = SentimentScorer::new();
        let s = scorer.score("Stock plunges after earnings miss and layoffs");
        assert!(s < 0.0, "expected negative, got {s}");
        assert!(s >= -1.0);
    }

    #[test]
    fn mixed_headline_averages() {
        let scorer = SentimentScorer::new();
        // 2 positive (profit, growth), 3 negative (lawsuit, loss, risk) → -1/5.
        let s = scorer.score("profit growth offset by lawsuit loss risk");
        assert!((s - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn negation_flips_polarity() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("strong quarter"), 1.0);
        assert_eq!(scorer.score("not strong quarter"), -1.0);
        assert_eq!(scorer.score("no loss this quarter"), 1.0);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("SURGE!"), scorer.score("surge"));
        assert_eq!(scorer.score("profit, growth."), scorer.score("profit growth"));
    }

    #[test]
    fn deterministic_for_identical_input() {
        let scorer = SentimentScorer::new();
        let text = "Analysts upgrade outlook despite weak guidance";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn score_stays_in_bounds() {
        let scorer = SentimentScorer::new();
        let all_pos = "surge rally gain profit growth strong beat win soar record";
        let all_neg = "plunge crash loss miss weak decline fraud lawsuit slump warn";
        assert_eq!(scorer.score(all_pos), 1.0);
        assert_eq!(scorer.score(all_neg), -1.0);
    }
}
