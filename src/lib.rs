//! Cloud Security Academy — core of an interactive cloud-security course.
//!
//! DESIGN
//! ======
//! The crate owns everything below the presentation layer: the static
//! curriculum catalog, the guided lab step validator, learner progress, the
//! per-module walkthrough state, the product simulators and the tutor
//! gateway. All learner state is in-memory and owned by a single caller; the
//! tutor call is the only async operation and the only network I/O.

pub mod config;
pub mod curriculum;
pub mod lab;
pub mod progress;
pub mod quiz;
pub mod simulator;
pub mod tutor;
pub mod walkthrough;

pub use config::TutorConfig;
pub use curriculum::{Curriculum, CurriculumError};
pub use lab::{LabSession, LabValue, SubmitOutcome};
pub use progress::UserProgress;
pub use quiz::{QuizError, QuizSheet};
pub use simulator::ProductSimulator;
pub use tutor::{Transcript, TutorGateway};
pub use walkthrough::ModuleWalkthrough;
