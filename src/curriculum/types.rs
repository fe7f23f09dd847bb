//! Catalog types — modules, lessons, quizzes, labs and products.
//!
//! Everything here is immutable once the catalog is loaded. Learner state
//! (answers, lab progress, completion) lives in `quiz`, `lab` and `progress`.

use serde::{Deserialize, Serialize};

use crate::lab::StepRule;

// =============================================================================
// MODULE
// =============================================================================

/// Catalog-level availability of a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleStatus {
    Locked,
    #[default]
    Available,
    InProgress,
    Completed,
}

/// A top-level curriculum unit: lessons, a quiz and an optional lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the presentation layer (e.g. `"Shield"`).
    pub icon: String,
    /// Human-readable duration label (e.g. `"35 min"`).
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub status: ModuleStatus,
    pub lessons: Vec<SubModule>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub lab: Option<Lab>,
}

// =============================================================================
// LESSONS
// =============================================================================

/// Diagram rendered alongside a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagramType {
    Hierarchy,
    VpcPerimeter,
    KmsFlow,
    SccDashboard,
    EnterpriseArch,
    Cybershield,
    AiSecurity,
}

/// A single lesson inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubModule {
    pub id: String,
    pub title: String,
    /// Lesson body in lightweight markup (headers, lists, bold/code spans).
    pub content: String,
    #[serde(default)]
    pub diagram: Option<DiagramType>,
}

// =============================================================================
// QUIZ
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    pub explanation: String,
}

// =============================================================================
// LAB
// =============================================================================

/// A scripted, step-gated scenario simulating a cloud console workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub id: String,
    pub title: String,
    pub description: String,
    pub steps: Vec<LabStep>,
    pub success_message: String,
}

/// One gated step of a lab.
///
/// `expected_action` names the simulated field this step validates. Every
/// rule in `rules` is evaluated against submissions for that field only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabStep {
    pub id: String,
    pub instruction: String,
    pub expected_action: String,
    #[serde(default)]
    pub hint: Option<String>,
    pub rules: Vec<StepRule>,
}

impl LabStep {
    /// Whether at least one rule can accept a submission.
    #[must_use]
    pub fn is_winnable(&self) -> bool {
        self.rules.iter().any(|rule| !rule.is_anti_pattern())
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// A security product showcased alongside the curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub docs_url: String,
    pub simulator: Simulator,
}

/// A short multiple-choice walkthrough of configuring a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulator {
    pub title: String,
    pub steps: Vec<SimulatorStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorStep {
    pub question: String,
    pub options: Vec<SimulatorOption>,
}

impl SimulatorStep {
    /// Whether any option can move the simulator forward.
    #[must_use]
    pub fn has_correct_option(&self) -> bool {
        self.options.iter().any(|o| o.correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorOption {
    pub label: String,
    pub correct: bool,
    /// Shown once the option is chosen, whether or not it is correct.
    pub feedback: String,
}
