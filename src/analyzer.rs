//! Pipeline entry point: validate, tokenize, score, summarize, assemble.

use tracing::debug;

use crate::error::AnalyzeError;
use crate::models::{AnalysisResult, AnalysisStats, WordCloud};
use crate::sentiment;
use crate::summarize;
use crate::tokenize;

/// The word cloud never carries more entries than this.
pub const WORD_CLOUD_LIMIT: usize = 30;

/// Run the full analysis over `text`. Pure and deterministic: no I/O, no
/// retained state, safe to call concurrently. Rejects blank input; every
/// other non-empty string produces a result.
pub fn analyze(text: &str) -> Result<AnalysisResult, AnalyzeError> {
    if text.trim().is_empty() {
        return Err(AnalyzeError::blank_text());
    }

    let tokens = tokenize::tokenize(text);
    debug!(
        "Tokenized input - chars={}, words={}, scored_words={}, distinct={}",
        text.chars().count(),
        tokens.word_count,
        tokens.words.len(),
        tokens.freq.len()
    );

    let sentiment = sentiment::score_words(&tokens.words);
    let sentences = summarize::split_sentences(text);
    let summary = summarize::summarize(text, &sentences, &tokens.freq);

    debug!(
        "Analysis complete - label={}, score={:.3}, sentences={}, summary_chars={}",
        sentiment.label.as_str(),
        sentiment.score,
        sentences.len(),
        summary.chars().count()
    );

    Ok(AnalysisResult {
        summary,
        sentiment_score: sentiment.score,
        sentiment_label: sentiment.label,
        word_cloud: WordCloud { words: tokens.freq.top(WORD_CLOUD_LIMIT) },
        analysis_data: AnalysisStats {
            word_count: tokens.word_count,
            sentence_count: sentences.len(),
            positive_words_found: sentiment.positive_hits,
            negative_words_found: sentiment.negative_hits,
            sentiment_distribution: sentiment::distribution(
                sentiment.positive_hits,
                sentiment.negative_hits,
            ),
        },
    })
}
