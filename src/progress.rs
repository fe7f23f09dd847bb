//! Learner progress across the curriculum.
//!
//! Progress is bound to the curriculum's module ids. Only those ids can be
//! completed, and certificate eligibility is derived from the completed set
//! on every read, never stored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::curriculum::{Curriculum, Module, ModuleStatus};

/// Points awarded per newly completed module.
pub const POINTS_PER_MODULE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    modules: Vec<String>,
    completed: HashSet<String>,
    current_module: Option<String>,
    score: u32,
}

impl UserProgress {
    /// Fresh progress over the given module ids.
    #[must_use]
    pub fn new<I, S>(module_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut modules: Vec<String> = Vec::new();
        for id in module_ids {
            let id = id.into();
            if !modules.contains(&id) {
                modules.push(id);
            }
        }
        Self { modules, completed: HashSet::new(), current_module: None, score: 0 }
    }

    /// Fresh progress over every module of `curriculum`.
    #[must_use]
    pub fn for_curriculum(curriculum: &Curriculum) -> Self {
        Self::new(curriculum.module_ids())
    }

    /// Record a module as completed. Returns `true` only on first completion
    /// of a module that belongs to the curriculum.
    pub fn complete_module(&mut self, id: &str) -> bool {
        if !self.tracks(id) {
            warn!(module = %id, "progress: unknown module ignored");
            return false;
        }
        if self.completed.contains(id) {
            return false;
        }
        self.completed.insert(id.to_owned());
        self.score += POINTS_PER_MODULE;
        info!(
            module = %id,
            completed = self.completed.len(),
            total = self.modules.len(),
            score = self.score,
            "progress: module completed"
        );
        if self.certificate_eligible() {
            info!("progress: certificate unlocked");
        }
        true
    }

    #[must_use]
    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    /// Whether `id` is one of the curriculum's modules.
    #[must_use]
    pub fn tracks(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m == id)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True iff every module of the curriculum is completed.
    #[must_use]
    pub fn certificate_eligible(&self) -> bool {
        !self.modules.is_empty() && self.modules.iter().all(|id| self.completed.contains(id))
    }

    /// Fraction of modules completed, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_ratio(&self) -> f64 {
        if self.modules.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / self.modules.len() as f64
    }

    #[must_use]
    pub fn current_module(&self) -> Option<&str> {
        self.current_module.as_deref()
    }

    pub fn set_current_module(&mut self, id: Option<&str>) {
        self.current_module = id.map(str::to_owned);
    }

    /// Display status: completed modules override the catalog status.
    #[must_use]
    pub fn module_status(&self, module: &Module) -> ModuleStatus {
        if self.is_completed(&module.id) { ModuleStatus::Completed } else { module.status }
    }
}

#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;
