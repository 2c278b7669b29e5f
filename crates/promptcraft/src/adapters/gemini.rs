//! Gemini generation adapter.
//!
//! Plain-text `generateContent` calls against the Google Generative Language API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::GenerationConfig;
use crate::domain::DomainError;
use crate::ports::GenerationService;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for a single Gemini model.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Creates a client for the default model using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        let client = Self::new(config.api_key.clone())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone());
        match config.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    /// Overrides the Gemini model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn generate_content(&self, instruction: &str) -> Result<String, GeminiError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: instruction }],
            }],
        };

        // Key travels in a header so it never shows up in error messages
        let mut builder = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| GeminiError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GeminiError::ParseError(err.to_string()))?;

        extract_text(&payload).ok_or_else(|| GeminiError::EmptyResponse(block_reason(&payload)))
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, instruction: &str) -> Result<String, DomainError> {
        self.generate_content(instruction)
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Gemini error types
#[derive(Debug, Clone, Error)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Gemini returned no text{}", blocked_suffix(.0))]
    EmptyResponse(Option<String>),
}

fn blocked_suffix(reason: &Option<String>) -> String {
    reason
        .as_ref()
        .map(|r| format!(" (blocked: {})", r))
        .unwrap_or_default()
}

// ============================================
// Helper Functions
// ============================================

/// Text of the first candidate, parts concatenated in order
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn block_reason(root: &Value) -> Option<String> {
    root.get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .or_else(|| {
            root.get("candidates")
                .and_then(|c| c.as_array())
                .and_then(|c| c.first())
                .and_then(|c| c.get("finishReason"))
        })
        .and_then(|r| r.as_str())
        .map(|r| r.to_string())
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited(message);
    }

    GeminiError::ApiError {
        status: status.as_u16(),
        message,
    }
}
