//! Repository interface for a user's saved quiz collection.
//!
//! Callers that orchestrate parsing and matching receive a repository by
//! injection instead of reaching into ambient shared state; storage
//! backends (browser storage, remote key-value stores) implement the same
//! trait outside this crate.

use crate::error::{QuizError, Result};
use crate::types::Quiz;
use uuid::Uuid;

/// Storage operations for saved quizzes. Titles are unique
/// case-insensitively within one collection.
pub trait QuizRepository {
    fn list(&self) -> Vec<Quiz>;
    fn get(&self, id: Uuid) -> Option<Quiz>;
    /// Insert or replace by id. Fails when a different quiz already holds
    /// the same title.
    fn put(&mut self, quiz: Quiz) -> Result<()>;
    fn delete(&mut self, id: Uuid) -> Result<()>;
}

/// In-memory repository, also the reference implementation for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    quizzes: Vec<Quiz>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a quiz other than `exclude_id` already uses the title,
    /// compared case-insensitively.
    pub fn title_exists(&self, title: &str, exclude_id: Option<Uuid>) -> bool {
        let wanted = title.to_lowercase();
        self.quizzes
            .iter()
            .any(|q| q.title.to_lowercase() == wanted && Some(q.id) != exclude_id)
    }
}

impl QuizRepository for MemoryStore {
    fn list(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    fn get(&self, id: Uuid) -> Option<Quiz> {
        self.quizzes.iter().find(|q| q.id == id).cloned()
    }

    fn put(&mut self, quiz: Quiz) -> Result<()> {
        if self.title_exists(&quiz.title, Some(quiz.id)) {
            return Err(QuizError::DuplicateTitle {
                title: quiz.title.clone(),
            });
        }
        match self.quizzes.iter_mut().find(|q| q.id == quiz.id) {
            Some(existing) => *existing = quiz,
            None => self.quizzes.push(quiz),
        }
        Ok(())
    }

    fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.quizzes.len();
        self.quizzes.retain(|q| q.id != id);
        if self.quizzes.len() == before {
            return Err(QuizError::QuizNotFound { id });
        }
        Ok(())
    }
}
