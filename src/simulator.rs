//! Product simulator — a guided multiple-choice walkthrough of one product.
//!
//! DESIGN
//! ======
//! Each step shows a question with options. Choosing an option reveals its
//! feedback and locks the step; only a correct choice unlocks `next`. A wrong
//! choice stays locked until `reset`. After the last step the simulator is
//! completed and `reset` is the only transition left.

use tracing::{debug, info};

use crate::curriculum::{Product, SimulatorOption, SimulatorStep};

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("option {option} out of range ({options} options)")]
    OptionOutOfRange { option: usize, options: usize },
}

/// What choosing an option did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseOutcome {
    Correct,
    Incorrect,
    /// Feedback is already showing for this step; the choice was ignored.
    Locked,
    AlreadyCompleted,
}

/// What `next` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Moved to the step at this index.
    Advanced { step: usize },
    Completed,
    /// No correct choice on the current step yet; nothing changed.
    NotReady,
}

#[derive(Debug, Clone)]
pub struct ProductSimulator {
    product: Product,
    step: usize,
    chosen: Option<usize>,
    completed: bool,
}

impl ProductSimulator {
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self { product, step: 0, chosen: None, completed: false }
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.product.simulator.steps.len()
    }

    /// The step on screen, or `None` once completed.
    #[must_use]
    pub fn current_step(&self) -> Option<&SimulatorStep> {
        if self.completed {
            return None;
        }
        self.product.simulator.steps.get(self.step)
    }

    /// The chosen option, whose `feedback` is on screen.
    #[must_use]
    pub fn feedback(&self) -> Option<&SimulatorOption> {
        let chosen = self.chosen?;
        self.current_step()?.options.get(chosen)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.chosen.is_some()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Choose option `option` of the current step.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::OptionOutOfRange`] when the step has no such option.
    pub fn choose(&mut self, option: usize) -> Result<ChooseOutcome, SimulatorError> {
        let Some(step) = self.current_step() else {
            return Ok(ChooseOutcome::AlreadyCompleted);
        };
        let Some(picked) = step.options.get(option) else {
            return Err(SimulatorError::OptionOutOfRange { option, options: step.options.len() });
        };
        if self.chosen.is_some() {
            return Ok(ChooseOutcome::Locked);
        }

        let correct = picked.correct;
        debug!(product = %self.product.id, step = self.step, option, correct, "simulator: option chosen");
        self.chosen = Some(option);
        Ok(if correct { ChooseOutcome::Correct } else { ChooseOutcome::Incorrect })
    }

    /// Move past the current step after a correct choice.
    pub fn next(&mut self) -> NextOutcome {
        if !self.feedback().is_some_and(|o| o.correct) {
            return NextOutcome::NotReady;
        }
        self.chosen = None;
        if self.step + 1 < self.step_count() {
            self.step += 1;
            NextOutcome::Advanced { step: self.step }
        } else {
            self.completed = true;
            info!(product = %self.product.id, "simulator: completed");
            NextOutcome::Completed
        }
    }

    pub fn reset(&mut self) {
        self.step = 0;
        self.chosen = None;
        self.completed = false;
    }
}

#[cfg(test)]
#[path = "simulator_test.rs"]
mod tests;
