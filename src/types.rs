//! Core types for quiz assembly and grading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single question/answer record.
///
/// Both fields are stored trimmed. A pair may have one empty field while a
/// quiz is being edited; a pair with both fields empty is dropped by
/// [`Quiz::new`] before it reaches a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerPair {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswerPair {
    /// Create a pair, trimming both fields.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        }
    }

    /// True when both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.answer.is_empty()
    }
}

/// A saved quiz: an ordered set of question/answer pairs plus metadata.
///
/// Serialized field names match the stored JSON format (`createdAt`,
/// `questionCount`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionAnswerPair>,
    pub created_at: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub question_count: usize,
}

impl Quiz {
    /// Create a quiz from parsed pairs. Pairs with both fields empty are
    /// discarded; `question_count` tracks the retained pairs.
    pub fn new(title: &str, description: &str, questions: Vec<QuestionAnswerPair>) -> Self {
        let questions: Vec<QuestionAnswerPair> =
            questions.into_iter().filter(|p| !p.is_empty()).collect();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            question_count: questions.len(),
            questions,
            created_at: now,
            last_edited: now,
        }
    }

    /// Replace the question list, keeping `question_count` and
    /// `last_edited` in sync.
    pub fn set_questions(&mut self, questions: Vec<QuestionAnswerPair>) {
        self.questions = questions.into_iter().filter(|p| !p.is_empty()).collect();
        self.question_count = self.questions.len();
        self.last_edited = Utc::now();
    }
}

/// How a single question was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub given_answer: String,
    pub is_correct: bool,
}

/// Outcome of grading a completed matching session.
///
/// Computed once per completed session and left untouched until a retake
/// resets the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedResult {
    pub per_question: HashMap<String, GradedAnswer>,
    /// Percentage in `[0, 100]`, not rounded.
    pub score: f64,
}
