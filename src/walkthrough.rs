//! Module walkthrough — the learner's pass through one module.
//!
//! Owns the lesson cursor, the quiz sheet and the lab session for a module,
//! and gates completion on both: every quiz question answered and, when the
//! module has a lab, the lab passed at least once. Restarting a passed lab
//! does not revoke the pass.

use tracing::info;

use crate::curriculum::{DiagramType, Module, SubModule};
use crate::lab::{LabSession, LabValue, SubmitOutcome};
use crate::progress::UserProgress;
use crate::quiz::{AnswerFeedback, QuizError, QuizSheet};

#[derive(Debug, thiserror::Error)]
pub enum WalkthroughError {
    #[error("module {module} not ready: {answered}/{total} questions answered, lab passed: {lab_passed}")]
    NotReady { module: String, answered: usize, total: usize, lab_passed: bool },
}

/// Where `next_lesson` moved the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStep {
    /// Moved on to the lesson at this index.
    Lesson(usize),
    /// Past the last lesson; show the module's diagrams.
    Visualize,
}

#[derive(Debug, Clone)]
pub struct ModuleWalkthrough {
    module: Module,
    lesson: usize,
    quiz: QuizSheet,
    lab: Option<LabSession>,
    lab_passed: bool,
}

impl ModuleWalkthrough {
    #[must_use]
    pub fn new(module: Module) -> Self {
        let quiz = QuizSheet::new(module.quiz.clone());
        let lab = module.lab.clone().map(LabSession::new);
        Self { module, lesson: 0, quiz, lab, lab_passed: false }
    }

    #[must_use]
    pub fn module(&self) -> &Module {
        &self.module
    }

    // -------------------------------------------------------------------------
    // Lessons
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn lesson_index(&self) -> usize {
        self.lesson
    }

    #[must_use]
    pub fn current_lesson(&self) -> Option<&SubModule> {
        self.module.lessons.get(self.lesson)
    }

    #[must_use]
    pub fn diagram(&self) -> Option<DiagramType> {
        self.current_lesson().and_then(|l| l.diagram)
    }

    pub fn next_lesson(&mut self) -> LessonStep {
        if self.lesson + 1 < self.module.lessons.len() {
            self.lesson += 1;
            LessonStep::Lesson(self.lesson)
        } else {
            LessonStep::Visualize
        }
    }

    /// Step back one lesson. `None` on the first lesson, where the cursor stays.
    pub fn previous_lesson(&mut self) -> Option<usize> {
        self.lesson = self.lesson.checked_sub(1)?;
        Some(self.lesson)
    }

    // -------------------------------------------------------------------------
    // Quiz
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn quiz(&self) -> &QuizSheet {
        &self.quiz
    }

    /// # Errors
    ///
    /// Propagates [`QuizError`] for unknown questions or out-of-range choices.
    pub fn answer(&mut self, question_id: &str, choice: usize) -> Result<AnswerFeedback<'_>, QuizError> {
        self.quiz.answer(question_id, choice)
    }

    // -------------------------------------------------------------------------
    // Lab
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn lab(&self) -> Option<&LabSession> {
        self.lab.as_ref()
    }

    /// Forward a field change to the lab. `None` when the module has no lab.
    pub fn submit_lab_action(&mut self, action: &str, value: impl Into<LabValue>) -> Option<SubmitOutcome> {
        let outcome = self.lab.as_mut()?.submit_action(action, value);
        if outcome == SubmitOutcome::Completed {
            self.lab_passed = true;
        }
        Some(outcome)
    }

    pub fn restart_lab(&mut self) {
        if let Some(lab) = self.lab.as_mut() {
            lab.restart();
        }
    }

    #[must_use]
    pub fn lab_passed(&self) -> bool {
        self.lab_passed
    }

    // -------------------------------------------------------------------------
    // Completion
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn can_complete(&self) -> bool {
        self.quiz.is_done() && (self.lab.is_none() || self.lab_passed)
    }

    /// Record the module in `progress`. Returns whether it was newly completed.
    ///
    /// # Errors
    ///
    /// Returns [`WalkthroughError::NotReady`] while the quiz or lab is unfinished.
    pub fn finish(&self, progress: &mut UserProgress) -> Result<bool, WalkthroughError> {
        if !self.can_complete() {
            return Err(WalkthroughError::NotReady {
                module: self.module.id.clone(),
                answered: self.quiz.answered_count(),
                total: self.quiz.questions().len(),
                lab_passed: self.lab_passed,
            });
        }
        info!(module = %self.module.id, correct = self.quiz.correct_count(), "walkthrough: module finished");
        Ok(progress.complete_module(&self.module.id))
    }

    /// Context string handed to the tutor alongside each question.
    #[must_use]
    pub fn tutor_context(&self) -> String {
        match self.current_lesson() {
            Some(lesson) => format!("Current Module: {}. Topic: {}.", self.module.title, lesson.title),
            None => format!("Current Module: {}.", self.module.title),
        }
    }
}

#[cfg(test)]
#[path = "walkthrough_test.rs"]
mod tests;
