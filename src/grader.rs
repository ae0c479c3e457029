//! Grading of a completed matching session.

use crate::types::{GradedAnswer, GradedResult, QuestionAnswerPair};
use std::collections::HashMap;

/// Grade a pairing against the answer key.
///
/// Correctness is exact, case-sensitive string equality. A key question
/// missing from `pairing` is graded incorrect with an empty given answer.
/// The score is `100 * correct / total`, unrounded; an empty key grades
/// to 0.0.
pub fn grade(pairing: &HashMap<String, String>, answer_key: &[QuestionAnswerPair]) -> GradedResult {
    let mut per_question = HashMap::with_capacity(answer_key.len());
    let mut correct = 0usize;

    for item in answer_key {
        let (given_answer, is_correct) = match pairing.get(&item.question) {
            Some(given) => (given.clone(), *given == item.answer),
            None => (String::new(), false),
        };
        if is_correct {
            correct += 1;
        }
        per_question.insert(
            item.question.clone(),
            GradedAnswer {
                given_answer,
                is_correct,
            },
        );
    }

    let score = if answer_key.is_empty() {
        0.0
    } else {
        correct as f64 / answer_key.len() as f64 * 100.0
    };
    GradedResult {
        per_question,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(items: &[(&str, &str)]) -> Vec<QuestionAnswerPair> {
        items
            .iter()
            .map(|(q, a)| QuestionAnswerPair::new(q, a))
            .collect()
    }

    fn pairing(items: &[(&str, &str)]) -> HashMap<String, String> {
        items
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect()
    }

    #[test]
    fn all_correct_scores_100() {
        let result = grade(&pairing(&[("Q1", "A1"), ("Q2", "A2")]), &key(&[("Q1", "A1"), ("Q2", "A2")]));
        assert_eq!(result.score, 100.0);
        assert!(result.per_question.values().all(|g| g.is_correct));
    }

    #[test]
    fn all_wrong_scores_0() {
        let result = grade(&pairing(&[("Q1", "A2"), ("Q2", "A1")]), &key(&[("Q1", "A1"), ("Q2", "A2")]));
        assert_eq!(result.score, 0.0);
        assert!(result.per_question.values().all(|g| !g.is_correct));
    }

    #[test]
    fn partial_score_is_unrounded() {
        let result = grade(
            &pairing(&[("Q1", "A1"), ("Q2", "x"), ("Q3", "x")]),
            &key(&[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")]),
        );
        assert!((result.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let result = grade(&pairing(&[("Q1", "paris")]), &key(&[("Q1", "Paris")]));
        assert!(!result.per_question["Q1"].is_correct);
    }

    #[test]
    fn missing_pairing_is_incorrect_with_empty_answer() {
        let result = grade(&pairing(&[("Q1", "A1")]), &key(&[("Q1", "A1"), ("Q2", "A2")]));
        let graded = &result.per_question["Q2"];
        assert!(!graded.is_correct);
        assert_eq!(graded.given_answer, "");
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn empty_key_grades_to_zero() {
        let result = grade(&HashMap::new(), &[]);
        assert_eq!(result.score, 0.0);
        assert!(result.per_question.is_empty());
    }
}
