//! Quiz answer sheet for one module.

use std::collections::HashMap;

use crate::curriculum::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("question {question} has {options} options, got choice {choice}")]
    ChoiceOutOfRange { question: String, choice: usize, options: usize },
}

/// Result of answering one question, shown with the explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback<'a> {
    pub correct: bool,
    pub explanation: &'a str,
}

/// Answers chosen so far, keyed by question id.
///
/// Re-answering overwrites the previous choice; answers are never removed.
#[derive(Debug, Clone)]
pub struct QuizSheet {
    questions: Vec<QuizQuestion>,
    answers: HashMap<String, usize>,
}

impl QuizSheet {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions, answers: HashMap::new() }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Record `choice` for `question_id`.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError`] for an unknown question or an out-of-range choice;
    /// the sheet is left unchanged.
    pub fn answer(&mut self, question_id: &str, choice: usize) -> Result<AnswerFeedback<'_>, QuizError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_owned()))?;

        if choice >= question.options.len() {
            return Err(QuizError::ChoiceOutOfRange {
                question: question_id.to_owned(),
                choice,
                options: question.options.len(),
            });
        }

        self.answers.insert(question_id.to_owned(), choice);
        Ok(AnswerFeedback { correct: choice == question.correct_answer, explanation: &question.explanation })
    }

    #[must_use]
    pub fn chosen(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Every question has an answer, right or wrong.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_answer))
            .count()
    }
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
