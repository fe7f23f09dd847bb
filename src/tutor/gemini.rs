//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `/models/{model}:generateContent`. Pure parsing in
//! `parse_response` for testability.

use std::time::Duration;

use super::types::{TutorChat, TutorError};
use crate::config::TutorConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client for the model and base URL in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TutorError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(api_key: String, config: &TutorConfig) -> Result<Self, TutorError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TutorError::HttpClientBuild(e.to_string()))?;
        let endpoint = endpoint(&config.base_url, &config.model);
        Ok(Self { http, api_key, model: config.model.clone(), endpoint })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl TutorChat for GeminiClient {
    async fn generate(&self, system: &str, question: &str) -> Result<String, TutorError> {
        let body = build_request(system, question);

        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TutorError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TutorError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(TutorError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!("{}/models/{model}:generateContent", base_url.trim_end_matches('/'))
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    contents: Vec<ApiContent<'a>>,
}

#[derive(serde::Serialize)]
struct ApiContent<'a> {
    role: &'a str,
    parts: Vec<ApiPart<'a>>,
}

#[derive(serde::Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

// =============================================================================
// REQUEST / PARSING
// =============================================================================

/// The instruction and the question travel as two consecutive user turns.
fn build_request<'a>(system: &'a str, question: &'a str) -> ApiRequest<'a> {
    ApiRequest {
        contents: vec![
            ApiContent { role: "user", parts: vec![ApiPart { text: system }] },
            ApiContent { role: "user", parts: vec![ApiPart { text: question }] },
        ],
    }
}

/// Concatenate the text parts of the first candidate. No candidate yields "".
fn parse_response(json: &str) -> Result<String, TutorError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| TutorError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
