//! Heuristic text analysis: a word-frequency profile for visualization, a
//! lexicon-based sentiment score with a label, and an extractive summary of
//! one to three verbatim sentences.
//!
//! The pipeline is a pure, synchronous function: same input, same output.
//! The only failure is rejecting blank input before tokenization starts.

pub mod analyzer;
pub mod api;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod sentiment;
pub mod summarize;
pub mod tokenize;

pub use analyzer::analyze;
pub use error::AnalyzeError;
pub use models::{AnalysisResult, SentimentLabel};
