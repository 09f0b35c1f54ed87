//! Error types used throughout the crate.

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while running the quiz flow.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Scoring was invoked with no stored answer sheet.
    #[error("no stored answers; the quiz has to be taken from the start")]
    MissingAnswers,

    /// The stored sheet could not be written or read back.
    #[error("stored answers unreadable: {0}")]
    Storage(#[from] serde_json::Error),
}
