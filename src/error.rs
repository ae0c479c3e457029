//! Error types for quiz-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors surfaced by quiz repositories.
///
/// The parser, grader, and matching session are total functions and never
/// return errors; only storage-facing operations can fail.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("a quiz titled \"{title}\" already exists")]
    DuplicateTitle { title: String },

    #[error("no quiz with id {id}")]
    QuizNotFound { id: Uuid },
}
