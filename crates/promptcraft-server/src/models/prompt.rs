//! Refine / Evaluate request and response bodies

use promptcraft::{LengthTier, PromptRequest, Refinement, DEFAULT_TARGET_MODEL};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RefineRequest {
    #[serde(default)]
    #[schema(example = "Explain recursion")]
    pub prompt: String,
    /// "short", "medium" or "long"; anything else means "medium"
    #[schema(example = "short")]
    pub max_words: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Target model the refined prompt is written for (default "ChatGPT")
    #[schema(example = "Gemini")]
    pub model: Option<String>,
}

impl From<RefineRequest> for PromptRequest {
    fn from(req: RefineRequest) -> Self {
        PromptRequest::new(req.prompt)
            .with_length(
                req.max_words
                    .as_deref()
                    .map(LengthTier::from_label)
                    .unwrap_or_default(),
            )
            .with_target_model(req.model.unwrap_or_else(|| DEFAULT_TARGET_MODEL.to_string()))
            .with_tags(req.tags.unwrap_or_default())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefineResponse {
    pub target_model: String,
    pub refined_output: String,
}

impl From<Refinement> for RefineResponse {
    fn from(refinement: Refinement) -> Self {
        Self {
            target_model: refinement.target_model,
            refined_output: refinement.result.normalized,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    pub evaluation: String,
}
