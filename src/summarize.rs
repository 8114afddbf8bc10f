//! Sentence segmentation and extractive summarization.
//!
//! A greedy single-pass heuristic, not an optimal summarizer: sentences are
//! scored by position, keyword frequency and sentiment-word density, then the
//! best two or three are re-joined in document order.

use itertools::Itertools;

use crate::lexicon;
use crate::tokenize::{fold, FrequencyTable};

/// Fragments whose trimmed length is at or below this never count as
/// sentences.
pub const MIN_SENTENCE_CHARS: usize = 15;

/// Short-input summaries are cut at this many characters.
pub const TRUNCATE_AT: usize = 200;

/// A selected summary longer than this drops back to two sentences.
pub const SUMMARY_CAP: usize = 300;

pub const FALLBACK_SUMMARY: &str = "Key insights from the analyzed text.";

const MAX_SUMMARY_SENTENCES: usize = 3;
const FIRST_SENTENCE_BONUS: i32 = 3;
const LAST_SENTENCE_BONUS: i32 = 2;
const SENTIMENT_WORD_BONUS: i32 = 3;
const SHORT_SENTENCE_PENALTY: i32 = 2;
const LONG_SENTENCE_PENALTY: i32 = 1;

/// Split on runs of sentence terminators and keep the trimmed fragments long
/// enough to count. The returned slices are verbatim from the input.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

/// Build the extractive summary for `text` given its qualifying sentences and
/// the global word-frequency table.
pub fn summarize(text: &str, sentences: &[&str], freq: &FrequencyTable) -> String {
    let summary = if sentences.len() <= 2 {
        truncate_chars(text.trim(), TRUNCATE_AT)
    } else if sentences.len() <= MAX_SUMMARY_SENTENCES {
        join_sentences(&sentences[..2])
    } else {
        let scored = score_sentences(sentences, freq);
        let joined = join_sentences(&select_top(&scored, MAX_SUMMARY_SENTENCES));
        if joined.chars().count() > SUMMARY_CAP {
            join_sentences(&select_top(&scored, 2))
        } else {
            joined
        }
    };

    if summary.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        summary
    }
}

struct ScoredSentence<'a> {
    sentence: &'a str,
    score: i32,
    index: usize,
}

fn score_sentences<'a>(sentences: &[&'a str], freq: &FrequencyTable) -> Vec<ScoredSentence<'a>> {
    let last = sentences.len() - 1;

    sentences
        .iter()
        .enumerate()
        .map(|(index, &sentence)| {
            let mut score = 0i32;
            if index == 0 {
                score += FIRST_SENTENCE_BONUS;
            }
            if index == last {
                score += LAST_SENTENCE_BONUS;
            }

            // keyword density + sentiment words; frequency lookups use the
            // uncleaned folded word, so punctuated occurrences simply miss
            let words: Vec<String> = sentence.split_whitespace().map(fold).collect();
            for word in &words {
                let count = freq.get(word);
                if count > 1 {
                    score += count as i32;
                }
                if lexicon::is_sentiment_bearing(word) {
                    score += SENTIMENT_WORD_BONUS;
                }
            }

            if words.len() < 5 {
                score -= SHORT_SENTENCE_PENALTY;
            }
            if words.len() > 30 {
                score -= LONG_SENTENCE_PENALTY;
            }

            ScoredSentence { sentence, score, index }
        })
        .collect()
}

/// Top `n` by score (stable, so tied sentences keep document order), then
/// restored to document order so the summary reads front to back.
fn select_top<'a>(scored: &[ScoredSentence<'a>], n: usize) -> Vec<&'a str> {
    let mut ranked: Vec<&ScoredSentence<'a>> = scored.iter().collect();
    ranked.sort_by_key(|s| std::cmp::Reverse(s.score));
    ranked.truncate(n);
    ranked.sort_by_key(|s| s.index);
    ranked.into_iter().map(|s| s.sentence).collect()
}

fn join_sentences(sentences: &[&str]) -> String {
    let mut out = sentences.iter().join(". ");
    out.push('.');
    out
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max).collect();
        format!("{cut}...")
    }
}
