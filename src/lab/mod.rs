//! Lab — guided, step-gated console simulations.
//!
//! DESIGN
//! ======
//! Each step carries a list of tagged predicates (`StepRule`) loaded from the
//! catalog; `LabSession` evaluates them generically instead of hardcoding
//! per-lab branches. The presentation layer renders the simulated fields and
//! forwards every field change to `LabSession::submit_action`.

pub mod rule;
pub mod session;

pub use rule::{LabValue, StepRule, Verdict};
pub use session::{LabSession, LabSessionState, MISMATCH_FEEDBACK, SubmitOutcome};
