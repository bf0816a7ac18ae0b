//! # Gemini Provider
//!
//! [`GeminiModel`] implements [`GenerativeModel`] on top of Google's Gemini
//! `generateContent` REST endpoint:
//!
//! ```text
//! POST {base_url}/v1beta/models/{model}:generateContent
//! x-goog-api-key: {api_key}
//! ```
//!
//! The key only ever travels in the header, and transport errors are stripped
//! of their URL before they leave this module.
//!
//! Only the text of the first candidate is used. A response with no text (for
//! instance when the prompt was blocked) is reported as [`MentorError::EmptyResponse`].

use crate::error::MentorError;
use crate::traits::model::GenerativeModel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use util::config::AppConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Request body for the Gemini API.
#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

/// Error envelope Google returns alongside non-2xx statuses.
#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Client for one Gemini model.
#[derive(Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client from configuration, or `None` when no credential is set.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        config.has_gemini_credential().then(|| {
            Self::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, MentorError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| MentorError::Http(e.without_url()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| MentorError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(MentorError::Upstream(upstream_error_message(
                status,
                &response_text,
            )));
        }

        extract_text(&response_text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn upstream_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<GeminiErrorResponse>(body) {
        Ok(parsed) => format!("Gemini returned {}: {}", status, parsed.error.message),
        Err(_) => format!("Gemini returned {}: {}", status, body),
    }
}

/// Pulls the generated text out of a successful `generateContent` body.
fn extract_text(body: &str) -> Result<String, MentorError> {
    let response = serde_json::from_str::<GeminiResponse>(body).map_err(|e| {
        MentorError::Upstream(format!(
            "error decoding response body: {}. Full response: {}",
            e, body
        ))
    })?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(MentorError::EmptyResponse);
    }
    Ok(text)
}
