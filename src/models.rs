use serde::{Deserialize, Serialize};

/// Sentiment bucket derived from the score thresholds in `sentiment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloud {
    pub words: Vec<WordEntry>, // descending frequency, ties in first-seen order
}

/// Display-only smoothed fractions; the three need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub word_count: usize,     // all whitespace tokens, before the length filter
    pub sentence_count: usize, // fragments that survived the minimum-length cut
    pub positive_words_found: u32,
    pub negative_words_found: u32,
    pub sentiment_distribution: SentimentDistribution,
}

/// The aggregate wire contract returned per request and persisted by the
/// caller (which attaches its own id / user / timestamp fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub word_cloud: WordCloud,
    pub analysis_data: AnalysisStats,
}
