//! Lab session — drives one lab through its steps.
//!
//! States are `step_0 .. step_{N-1}` then `completed`. The only transition is
//! forward on an accepted submission; `restart` is the only way back.
//! Invalid input never errors: it produces feedback and the step holds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::rule::{LabValue, Verdict, evaluate};
use crate::curriculum::{Lab, LabStep};

/// Feedback shown when a submission matches no rule of the current step.
pub const MISMATCH_FEEDBACK: &str = "That setting doesn't match the lab requirements. Read the hint.";

// =============================================================================
// STATE
// =============================================================================

/// Mutable learner state for one running lab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSessionState {
    /// 0-based index of the step awaiting input.
    pub current_step: usize,
    /// Last value submitted per action tag.
    pub values: HashMap<String, LabValue>,
    pub feedback: Option<String>,
    pub completed: bool,
}

/// What a single submission did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The step passed; `step` is the new current index.
    Advanced { step: usize },
    /// The last step passed. The caller should record module progress.
    Completed,
    /// The value is a known anti-pattern for this step.
    Blocked { message: String },
    /// No rule matched; `feedback` is whatever feedback is now pending.
    Rejected { feedback: String },
    /// The lab was already finished; only the value was recorded.
    AlreadyCompleted,
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Clone)]
pub struct LabSession {
    lab: Lab,
    state: LabSessionState,
}

impl LabSession {
    #[must_use]
    pub fn new(lab: Lab) -> Self {
        Self { lab, state: LabSessionState::default() }
    }

    #[must_use]
    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    #[must_use]
    pub fn state(&self) -> &LabSessionState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_step
    }

    /// The step awaiting input, or `None` once the lab is completed.
    #[must_use]
    pub fn current_step(&self) -> Option<&LabStep> {
        if self.state.completed {
            return None;
        }
        self.lab.steps.get(self.state.current_step)
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.current_step().and_then(|step| step.hint.as_deref())
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.state.feedback.as_deref()
    }

    #[must_use]
    pub fn value(&self, action: &str) -> Option<&LabValue> {
        self.state.values.get(action)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.completed
    }

    /// The lab's success message, available once completed.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.state.completed.then_some(self.lab.success_message.as_str())
    }

    /// Submit a new value for the simulated field `action`.
    pub fn submit_action(&mut self, action: &str, value: impl Into<LabValue>) -> SubmitOutcome {
        let value = value.into();
        let outcome = self.evaluate_submission(action, &value);
        self.state.values.insert(action.to_owned(), value);
        outcome
    }

    fn evaluate_submission(&mut self, action: &str, value: &LabValue) -> SubmitOutcome {
        if self.state.completed {
            return SubmitOutcome::AlreadyCompleted;
        }

        let index = self.state.current_step;
        let Some(step) = self.lab.steps.get(index) else {
            return SubmitOutcome::AlreadyCompleted;
        };

        let verdict =
            if step.expected_action == action { evaluate(&step.rules, value) } else { Verdict::NoMatch };

        match verdict {
            Verdict::AntiPattern(message) => {
                debug!(lab = %self.lab.id, step = %step.id, %action, "lab: anti-pattern rejected");
                let message = message.to_owned();
                self.state.feedback = Some(message.clone());
                SubmitOutcome::Blocked { message }
            }
            Verdict::Accept => {
                self.state.feedback = None;
                if index + 1 < self.lab.steps.len() {
                    self.state.current_step = index + 1;
                    debug!(lab = %self.lab.id, step = index + 1, "lab: step advanced");
                    SubmitOutcome::Advanced { step: index + 1 }
                } else {
                    self.state.completed = true;
                    info!(lab = %self.lab.id, "lab: completed");
                    SubmitOutcome::Completed
                }
            }
            Verdict::NoMatch => {
                let feedback = self
                    .state
                    .feedback
                    .get_or_insert_with(|| MISMATCH_FEEDBACK.to_owned())
                    .clone();
                SubmitOutcome::Rejected { feedback }
            }
        }
    }

    /// Reset to the first step with no values, feedback or completion.
    pub fn restart(&mut self) {
        debug!(lab = %self.lab.id, "lab: restarted");
        self.state = LabSessionState::default();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
