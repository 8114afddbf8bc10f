//! Lexicon-based sentiment scoring over the filtered word sequence.

use crate::lexicon;
use crate::models::{SentimentDistribution, SentimentLabel};
use crate::tokenize::clean_word;

pub const POSITIVE_THRESHOLD: f64 = 0.15;
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

#[derive(Debug, Clone, Copy)]
pub struct SentimentScore {
    pub score: f64,
    pub label: SentimentLabel,
    pub positive_hits: u32,
    pub negative_hits: u32,
}

/// Score the filtered words against the fixed lexicons. Matching happens on
/// the cleaned form, so `"amazing!"` still counts; the ratio denominator is
/// the full filtered-word count.
pub fn score_words(words: &[String]) -> SentimentScore {
    let mut positive_hits = 0u32;
    let mut negative_hits = 0u32;

    for word in words {
        let cleaned = clean_word(word);
        if lexicon::is_positive(&cleaned) {
            positive_hits += 1;
        } else if lexicon::is_negative(&cleaned) {
            negative_hits += 1;
        }
    }

    let total = words.len();
    let (score, label) = if total == 0 {
        (0.0, SentimentLabel::Neutral)
    } else {
        let positive_ratio = positive_hits as f64 / total as f64;
        let negative_ratio = negative_hits as f64 / total as f64;
        let score = ((positive_ratio - negative_ratio) * 2.0).clamp(-1.0, 1.0);
        (score, label_for(score))
    };

    SentimentScore { score, label, positive_hits, negative_hits }
}

pub fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Display-only distribution with a `+1` smoothing denominator and `0.33`
/// fallbacks for zero counts. Inherited as-is for output compatibility; the
/// fractions are not guaranteed to sum to 1.
pub fn distribution(positive_hits: u32, negative_hits: u32) -> SentimentDistribution {
    let pos = positive_hits as f64;
    let neg = negative_hits as f64;
    let denom = pos + neg + 1.0;

    SentimentDistribution {
        positive: if positive_hits > 0 { pos / denom } else { 0.33 },
        negative: if negative_hits > 0 { neg / denom } else { 0.33 },
        neutral: 1.0 - (pos + neg) / denom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_is_neutral() {
        let s = score_words(&[]);
        assert_eq!(s.score, 0.0);
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.positive_hits, 0);
        assert_eq!(s.negative_hits, 0);
    }

    #[test]
    fn punctuated_lexicon_words_still_match() {
        let s = score_words(&words(&["amazing!", "feel"]));
        assert_eq!(s.positive_hits, 1);
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn score_clamps_to_unit_interval() {
        let s = score_words(&words(&["terrible", "awful", "horrible"]));
        assert_eq!(s.score, -1.0);
        assert_eq!(s.label, SentimentLabel::Negative);
        assert_eq!(s.negative_hits, 3);
    }

    #[test]
    fn threshold_is_exclusive() {
        // 3 positive hits out of 40 words: score = (3/40)*2 = 0.15 exactly
        let mut xs = vec!["filler".to_string(); 37];
        xs.extend(words(&["good", "great", "best"]));
        let s = score_words(&xs);
        assert!((s.score - 0.15).abs() < 1e-12);
        assert_eq!(s.label, SentimentLabel::Neutral);
    }

    #[test]
    fn distribution_uses_smoothed_denominator() {
        let d = distribution(2, 1);
        assert_eq!(d.positive, 0.5);
        assert_eq!(d.negative, 0.25);
        assert_eq!(d.neutral, 0.25);
    }

    #[test]
    fn distribution_zero_counts_fall_back_to_constants() {
        let d = distribution(0, 0);
        assert_eq!(d.positive, 0.33);
        assert_eq!(d.negative, 0.33);
        assert_eq!(d.neutral, 1.0);
    }

    #[test]
    fn distribution_mixed_zero_keeps_the_fallback_asymmetry() {
        let d = distribution(3, 0);
        assert_eq!(d.positive, 0.75);
        assert_eq!(d.negative, 0.33);
        assert_eq!(d.neutral, 0.25);
    }
}
