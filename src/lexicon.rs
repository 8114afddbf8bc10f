//! Fixed sentiment lexicons, consulted by exact match only. Built once at
//! first use and never mutated, so concurrent callers share them freely.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "best", "awesome",
    "perfect", "happy", "joy", "beautiful", "success", "brilliant", "outstanding", "superb",
    "delightful", "impressive", "premium", "striking", "bright", "vivid", "solid", "smooth", "win",
    "sharp", "fast", "quick", "durable",
];

pub static NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "worst", "sad", "angry", "fail", "problem",
    "difficult", "pain", "wrong", "error", "ugly", "disappointing", "poor", "slow", "lacks",
    "limitations", "limited", "missing", "broken", "issues", "concerns", "weakness",
];

static POSITIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());

static NEGATIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());

pub fn is_positive(word: &str) -> bool {
    POSITIVE_SET.contains(word)
}

pub fn is_negative(word: &str) -> bool {
    NEGATIVE_SET.contains(word)
}

pub fn is_sentiment_bearing(word: &str) -> bool {
    is_positive(word) || is_negative(word)
}
