//! Error handling module for degreefit
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary wraps them with anyhow context.

use thiserror::Error;

/// Main error type for the recommender
#[derive(Error, Debug)]
pub enum RecommenderError {
    /// Status text that is neither Undergraduate nor Graduate
    #[error("Invalid student status: {0:?} (expected \"Undergraduate\" or \"Graduate\")")]
    InvalidStatus(String),

    /// A question has no recorded answer
    #[error("Please select an answer. ({program}: {question:?} is unanswered)")]
    IncompleteResponse { program: String, question: String },

    /// A recorded score outside the 1..=5 Likert range
    #[error("Invalid score {score} for {program}: {question:?} (expected 1-5)")]
    InvalidScore {
        program: String,
        question: String,
        score: u8,
    },

    /// Program name not present in the catalog
    #[error("Unknown program: {0:?}")]
    UnknownProgram(String),

    /// Response shape does not match the catalog
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors (response files, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for recommender operations
pub type Result<T> = std::result::Result<T, RecommenderError>;

impl RecommenderError {
    /// Create an incomplete response error for one question
    pub fn incomplete(program: impl Into<String>, question: impl Into<String>) -> Self {
        Self::IncompleteResponse {
            program: program.into(),
            question: question.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether the user can fix this by answering the current question
    pub fn is_missing_answer(&self) -> bool {
        matches!(self, Self::IncompleteResponse { .. })
    }
}
