//! Core library for assembling, taking, and grading matching quizzes.
//!
//! Provides:
//! - Free-text parser turning chat-style output into question/answer pairs
//! - Matching session state machine over shuffled questions and answers
//! - Deterministic grader with exact-match scoring
//! - Best-effort distractor generation for multiple-choice content
//! - Repository trait for saved quiz collections
//!
//! The parser, grader, and session are pure and synchronous; storage and
//! network collaborators live outside this crate.

pub mod distractor;
pub mod error;
pub mod grader;
pub mod parser;
pub mod session;
pub mod shuffle;
pub mod store;
pub mod types;

pub use error::{QuizError, Result};
pub use grader::grade;
pub use parser::{parse, render};
pub use session::{MatchSession, MatchState};
pub use store::{MemoryStore, QuizRepository};
pub use types::{GradedAnswer, GradedResult, QuestionAnswerPair, Quiz};
