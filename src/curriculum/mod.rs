//! Curriculum — the static course catalog and product showcase.
//!
//! DESIGN
//! ======
//! The catalog ships as YAML embedded in the binary and is parsed once at
//! startup. Loading validates the shape the rest of the crate relies on
//! (unique ids, answer indices in range, every lab step winnable) so lab
//! sessions and quiz sheets never have to handle a malformed catalog.
//! The catalog is read-only after load; callers look modules and labs up
//! by id.

mod types;

use std::collections::HashSet;

use serde::Deserialize;
use tracing::info;

pub use types::{
    DiagramType, Lab, LabStep, Module, ModuleStatus, Product, QuizQuestion, Simulator, SimulatorOption, SimulatorStep,
    SubModule,
};

const BUILTIN_CATALOG: &str = include_str!("catalog.yaml");

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    /// The catalog document is not valid YAML or does not match the schema.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog declares no modules.
    #[error("catalog has no modules")]
    Empty,

    #[error("duplicate module id: {0}")]
    DuplicateModule(String),

    #[error("duplicate lab id: {0}")]
    DuplicateLab(String),

    #[error("duplicate question id {question} in module {module}")]
    DuplicateQuestion { module: String, question: String },

    /// A quiz question points its correct answer past the end of its options.
    #[error("question {question} in module {module}: correct answer {index} out of range ({options} options)")]
    AnswerOutOfRange { module: String, question: String, index: usize, options: usize },

    #[error("lab {0} has no steps")]
    EmptyLab(String),

    /// A lab step carries only anti-pattern rules and can never be passed.
    #[error("step {step} of lab {lab} has no acceptance rule")]
    UnwinnableStep { lab: String, step: String },

    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("product {0} has an empty simulator")]
    EmptySimulator(String),

    /// A simulator step offers no correct option and can never be passed.
    #[error("simulator step {step} of product {product} has no correct option")]
    NoCorrectOption { product: String, step: usize },
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Deserialize)]
struct CatalogDocument {
    title: String,
    modules: Vec<Module>,
    #[serde(default)]
    products: Vec<Product>,
}

/// The loaded course catalog.
#[derive(Debug, Clone)]
pub struct Curriculum {
    title: String,
    modules: Vec<Module>,
    products: Vec<Product>,
}

impl Curriculum {
    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`CurriculumError`] if the bundled catalog fails validation.
    pub fn builtin() -> Result<Self, CurriculumError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CurriculumError::Parse`] for malformed YAML and the other
    /// variants for structural problems.
    pub fn from_yaml(raw: &str) -> Result<Self, CurriculumError> {
        let doc: CatalogDocument = serde_yaml::from_str(raw)?;
        Self::from_parts(doc.title, doc.modules, doc.products)
    }

    /// Build a catalog from already-constructed modules.
    ///
    /// # Errors
    ///
    /// Returns a [`CurriculumError`] when the modules violate catalog invariants.
    pub fn from_modules(title: impl Into<String>, modules: Vec<Module>) -> Result<Self, CurriculumError> {
        Self::from_parts(title, modules, Vec::new())
    }

    /// Build a catalog from modules and showcased products.
    ///
    /// # Errors
    ///
    /// Returns a [`CurriculumError`] when either list violates catalog invariants.
    pub fn from_parts(
        title: impl Into<String>,
        modules: Vec<Module>,
        products: Vec<Product>,
    ) -> Result<Self, CurriculumError> {
        validate(&modules)?;
        validate_products(&products)?;
        let title = title.into();
        let labs = modules.iter().filter(|m| m.lab.is_some()).count();
        info!(%title, modules = modules.len(), labs, products = products.len(), "curriculum loaded");
        Ok(Self { title, modules, products })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Modules in curriculum order.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Total number of modules; the certificate threshold.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[must_use]
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Module ids in curriculum order.
    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id.as_str())
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a lab by its own id, across all modules.
    #[must_use]
    pub fn lab(&self, id: &str) -> Option<&Lab> {
        self.modules
            .iter()
            .filter_map(|m| m.lab.as_ref())
            .find(|lab| lab.id == id)
    }
}

fn validate(modules: &[Module]) -> Result<(), CurriculumError> {
    if modules.is_empty() {
        return Err(CurriculumError::Empty);
    }

    let mut module_ids = HashSet::new();
    let mut lab_ids = HashSet::new();

    for module in modules {
        if !module_ids.insert(module.id.as_str()) {
            return Err(CurriculumError::DuplicateModule(module.id.clone()));
        }

        // Question ids only need to be unique per module; answer sheets are per module.
        let mut question_ids = HashSet::new();
        for q in &module.quiz {
            if !question_ids.insert(q.id.as_str()) {
                return Err(CurriculumError::DuplicateQuestion { module: module.id.clone(), question: q.id.clone() });
            }
            if q.correct_answer >= q.options.len() {
                return Err(CurriculumError::AnswerOutOfRange {
                    module: module.id.clone(),
                    question: q.id.clone(),
                    index: q.correct_answer,
                    options: q.options.len(),
                });
            }
        }

        if let Some(lab) = &module.lab {
            if !lab_ids.insert(lab.id.as_str()) {
                return Err(CurriculumError::DuplicateLab(lab.id.clone()));
            }
            if lab.steps.is_empty() {
                return Err(CurriculumError::EmptyLab(lab.id.clone()));
            }
            if let Some(step) = lab.steps.iter().find(|s| !s.is_winnable()) {
                return Err(CurriculumError::UnwinnableStep { lab: lab.id.clone(), step: step.id.clone() });
            }
        }
    }

    Ok(())
}

fn validate_products(products: &[Product]) -> Result<(), CurriculumError> {
    let mut ids = HashSet::new();
    for product in products {
        if !ids.insert(product.id.as_str()) {
            return Err(CurriculumError::DuplicateProduct(product.id.clone()));
        }
        let steps = &product.simulator.steps;
        if steps.is_empty() {
            return Err(CurriculumError::EmptySimulator(product.id.clone()));
        }
        if let Some(step) = steps.iter().position(|s| !s.has_correct_option()) {
            return Err(CurriculumError::NoCorrectOption { product: product.id.clone(), step });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
