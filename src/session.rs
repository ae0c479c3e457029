//! Matching session state machine.
//!
//! A session presents independently shuffled question and answer lists
//! and lets the caller pair them up one click at a time:
//!
//! - selecting an unpaired item makes it the pending selection;
//! - selecting an item while the opposite side is pending confirms a
//!   pairing and clears both selections;
//! - selecting an already-paired item undoes that pairing.
//!
//! Once every question is paired the session grades itself and freezes;
//! only [`MatchSession::retake`] resets it.

use crate::grader;
use crate::shuffle;
use crate::types::{GradedResult, QuestionAnswerPair};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of an in-progress or completed matching attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub shuffled_questions: Vec<String>,
    pub shuffled_answers: Vec<String>,
    /// Confirmed one-to-one question -> answer pairings.
    pub pairing: HashMap<String, String>,
    pub selected_question: Option<String>,
    pub selected_answer: Option<String>,
    pub is_complete: bool,
}

/// One quiz-taking attempt. Owns its [`MatchState`] exclusively; a retake
/// discards the old state and builds a fresh one from the same quiz.
pub struct MatchSession<R: Rng = StdRng> {
    answer_key: Vec<QuestionAnswerPair>,
    state: MatchState,
    result: Option<GradedResult>,
    rng: R,
}

impl MatchSession<StdRng> {
    /// Start a session over a quiz's question list.
    pub fn new(questions: &[QuestionAnswerPair]) -> Self {
        Self::with_rng(questions, StdRng::from_entropy())
    }
}

impl<R: Rng> MatchSession<R> {
    /// Start a session with an injected RNG for deterministic shuffles.
    pub fn with_rng(questions: &[QuestionAnswerPair], mut rng: R) -> Self {
        let state = fresh_state(questions, &mut rng);
        let mut session = Self {
            answer_key: questions.to_vec(),
            state,
            result: None,
            rng,
        };
        session.check_completion();
        session
    }

    /// Current state snapshot.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Graded result, available once the session is complete.
    pub fn result(&self) -> Option<&GradedResult> {
        self.result.as_ref()
    }

    /// Handle a click on a question.
    ///
    /// An already-paired question is unpaired (and any pending selection
    /// cleared); otherwise the question either confirms a pending answer
    /// into a pairing or becomes the pending selection itself. Unknown
    /// values and clicks after completion are ignored.
    pub fn select_question(&mut self, question: &str) {
        if self.state.is_complete {
            return;
        }
        if !self.state.shuffled_questions.iter().any(|q| q == question) {
            return;
        }

        if self.state.pairing.remove(question).is_some() {
            self.state.selected_question = None;
            self.state.selected_answer = None;
            return;
        }

        match self.state.selected_answer.take() {
            Some(answer) => {
                self.state.pairing.insert(question.to_string(), answer);
                self.state.selected_question = None;
                self.check_completion();
            }
            None => self.state.selected_question = Some(question.to_string()),
        }
    }

    /// Handle a click on an answer; symmetric to [`Self::select_question`],
    /// keyed on whether the answer is already a paired value.
    pub fn select_answer(&mut self, answer: &str) {
        if self.state.is_complete {
            return;
        }
        if !self.state.shuffled_answers.iter().any(|a| a == answer) {
            return;
        }

        let paired_question = self
            .state
            .pairing
            .iter()
            .find(|(_, paired)| paired.as_str() == answer)
            .map(|(question, _)| question.clone());
        if let Some(question) = paired_question {
            self.state.pairing.remove(&question);
            self.state.selected_question = None;
            self.state.selected_answer = None;
            return;
        }

        match self.state.selected_question.take() {
            Some(question) => {
                self.state.pairing.insert(question, answer.to_string());
                self.state.selected_answer = None;
                self.check_completion();
            }
            None => self.state.selected_answer = Some(answer.to_string()),
        }
    }

    /// Discard the current attempt and reshuffle for a fresh one. The new
    /// permutations are drawn independently of the previous ones.
    pub fn retake(&mut self) {
        self.state = fresh_state(&self.answer_key, &mut self.rng);
        self.result = None;
        self.check_completion();
    }

    fn check_completion(&mut self) {
        if self.state.pairing.len() == self.state.shuffled_questions.len() {
            self.state.is_complete = true;
            self.result = Some(grader::grade(&self.state.pairing, &self.answer_key));
        }
    }
}

fn fresh_state<R: Rng>(key: &[QuestionAnswerPair], rng: &mut R) -> MatchState {
    let questions: Vec<String> = key.iter().map(|p| p.question.clone()).collect();
    let answers: Vec<String> = key.iter().map(|p| p.answer.clone()).collect();
    MatchState {
        shuffled_questions: shuffle::shuffled(&questions, rng),
        shuffled_answers: shuffle::shuffled(&answers, rng),
        pairing: HashMap::new(),
        selected_question: None,
        selected_answer: None,
        is_complete: false,
    }
}
