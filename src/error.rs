use thiserror::Error;

/// The pipeline's only failure: the text payload is missing, not a string,
/// or blank. Every other step is total over non-empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    InvalidInput(&'static str),
}

impl AnalyzeError {
    pub fn missing_text() -> Self {
        AnalyzeError::InvalidInput("Text is required and must be a string")
    }

    pub fn blank_text() -> Self {
        AnalyzeError::InvalidInput("Text must not be empty")
    }
}
