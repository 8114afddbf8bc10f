//! Whitespace tokenizer and word-frequency counter.
//!
//! Frequency and sentiment analysis only look at words longer than
//! [`MIN_WORD_LEN`] characters, but the reported word count covers every
//! whitespace-delimited token. Downstream consumers depend on that
//! distinction, so the two counters stay separate.

use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use crate::models::WordEntry;

/// Words at or below this raw length never reach frequency or sentiment
/// scoring.
pub const MIN_WORD_LEN: usize = 3;

/// NFC-normalize and lowercase a raw token for comparison purposes.
pub fn fold(raw: &str) -> String {
    raw.nfc().collect::<String>().to_lowercase()
}

/// Strip everything that is not alphanumeric.
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Occurrence counts keyed by cleaned word, remembering first-seen order so
/// frequency ties resolve deterministically.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn add(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(c) => *c += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Top `limit` entries by frequency; ties keep first-seen order.
    pub fn top(&self, limit: usize) -> Vec<WordEntry> {
        let mut v: Vec<(&String, u32)> = self.order.iter().map(|w| (w, self.counts[w])).collect();
        v.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
        v.truncate(limit);
        v.into_iter()
            .map(|(w, c)| WordEntry { text: w.clone(), frequency: c })
            .collect()
    }
}

#[derive(Debug)]
pub struct TokenStats {
    /// Every whitespace-delimited token, counted before the length filter.
    pub word_count: usize,
    /// Folded tokens whose length exceeds [`MIN_WORD_LEN`], punctuation intact.
    pub words: Vec<String>,
    /// Counts of the cleaned long words.
    pub freq: FrequencyTable,
}

pub fn tokenize(text: &str) -> TokenStats {
    let mut word_count = 0usize;
    let mut words = Vec::new();
    let mut freq = FrequencyTable::default();

    for raw in text.split_whitespace() {
        word_count += 1;
        let word = fold(raw);
        if word.chars().count() <= MIN_WORD_LEN {
            continue;
        }
        let cleaned = clean_word(&word);
        // purely non-alphanumeric tokens ("----") vanish here
        if !cleaned.is_empty() {
            freq.add(cleaned);
        }
        words.push(word);
    }

    TokenStats { word_count, words, freq }
}
