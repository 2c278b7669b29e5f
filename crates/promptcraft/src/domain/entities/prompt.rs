//! Prompt - Requests, instructions and generation results
//!
//! Pure domain entities without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::services::normalizer;
use crate::domain::value_objects::LengthTier;

/// Target model used when the caller does not name one
pub const DEFAULT_TARGET_MODEL: &str = "ChatGPT";

/// PromptRequest - Input to the Refine operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptRequest {
    pub prompt: String,
    pub length: LengthTier,
    pub target_model: String,
    pub tags: Vec<String>,
}

impl PromptRequest {
    /// Create a request with default length, target model and no tags
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            length: LengthTier::default(),
            target_model: DEFAULT_TARGET_MODEL.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_length(mut self, length: LengthTier) -> Self {
        self.length = length;
        self
    }

    pub fn with_target_model(mut self, target_model: impl Into<String>) -> Self {
        self.target_model = target_model.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// GenerationInstruction - The composed text sent to the generation service
///
/// Only constructed by the instruction builders, so its content is always
/// a function of the request and the fixed templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInstruction(String);

impl GenerationInstruction {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for GenerationInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// GenerationResult - Raw model output and its normalized form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    pub raw: String,
    pub normalized: String,
}

impl GenerationResult {
    pub fn from_raw(raw: String) -> Self {
        let normalized = normalizer::normalize(&raw);
        Self { raw, normalized }
    }
}

/// Refinement - Outcome of the Refine operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Refinement {
    pub target_model: String,
    pub result: GenerationResult,
}

impl Refinement {
    /// Normalized text shown to the user
    pub fn refined_output(&self) -> &str {
        &self.result.normalized
    }
}

/// Evaluation - Outcome of the Evaluate operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    pub result: GenerationResult,
}

impl Evaluation {
    pub fn text(&self) -> &str {
        &self.result.normalized
    }
}
