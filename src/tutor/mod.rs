//! Tutor — forwards learner questions to a hosted language model.
//!
//! DESIGN
//! ======
//! `TutorGateway::ask` is a single best-effort request/response call. It
//! always yields a displayable string: a fixed reply when no credential is
//! configured (no network I/O), the model's text on success, and a fixed
//! apology on any provider error. Errors are logged, never returned.
//! No retries and no cancellation; the HTTP client's request timeout bounds
//! a hung call.

pub mod gemini;
pub mod transcript;
pub mod types;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::TutorConfig;
pub use transcript::{ChatMessage, Role, Transcript};
pub use types::{TutorChat, TutorError};

/// Reply when no API credential is configured.
pub const MISSING_KEY_REPLY: &str =
    "API Key is missing. Please ensure the GEMINI_API_KEY environment variable is set.";
/// Reply when the provider answered with no text.
pub const EMPTY_REPLY: &str = "I couldn't generate a response at this time.";
/// Reply when the provider call failed.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error connecting to the Security Tutor.";

/// Fixed instruction sent ahead of every question.
#[must_use]
pub fn system_instruction(context: &str) -> String {
    format!(
        "You are an expert Google Cloud Platform Security Architect.\n\
         You are tutoring a student who is learning about: {context}.\n\
         \n\
         Keep your answer concise, technical, and authoritative.\n\
         Use bullet points for clarity.\n\
         If relevant, mention specific GCP products (e.g., Cloud Armor, VPC-SC, IAM).\n\
         Do not give generic security advice; stick to the GCP implementation."
    )
}

// =============================================================================
// GATEWAY
// =============================================================================

#[derive(Clone)]
pub struct TutorGateway {
    client: Option<Arc<dyn TutorChat>>,
}

impl TutorGateway {
    /// Build from the environment credential (non-fatal when missing).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&TutorConfig::from_env())
    }

    /// Build a Gemini-backed gateway; falls back to disabled on any setup failure.
    #[must_use]
    pub fn from_config(config: &TutorConfig) -> Self {
        let Some(api_key) = config.api_key.clone() else {
            warn!("tutor: API key not configured; tutor disabled");
            return Self::disabled();
        };
        match gemini::GeminiClient::new(api_key, config) {
            Ok(client) => {
                info!(model = client.model(), "tutor: client initialized");
                Self::with_client(Arc::new(client))
            }
            Err(e) => {
                warn!(error = %e, "tutor: client init failed; tutor disabled");
                Self::disabled()
            }
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { client: None }
    }

    #[must_use]
    pub fn with_client(client: Arc<dyn TutorChat>) -> Self {
        Self { client: Some(client) }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Ask `question` with `context` describing what the learner is viewing.
    pub async fn ask(&self, question: &str, context: &str) -> String {
        let Some(client) = &self.client else {
            return MISSING_KEY_REPLY.to_string();
        };

        let system = system_instruction(context);
        debug!(question_len = question.len(), %context, "tutor: asking");

        match client.generate(&system, question).await {
            Ok(text) if text.is_empty() => {
                debug!("tutor: empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "tutor: request failed");
                ERROR_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
