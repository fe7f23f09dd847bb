//! Tutor types — errors and the provider seam.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by a tutor backend. Never escapes [`super::TutorGateway::ask`].
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl TutorError {
    /// Stable code for structured logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Provider-neutral text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TutorChat: Send + Sync {
    /// Generate a reply to `question` under the `system` instruction.
    ///
    /// # Errors
    ///
    /// Returns a [`TutorError`] if the request fails or the response is malformed.
    async fn generate(&self, system: &str, question: &str) -> Result<String, TutorError>;
}
