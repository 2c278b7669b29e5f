//! SessionState - Interactive session bookkeeping
//!
//! One value per user session, owned by the session loop and handed to each
//! page handler by `&mut`. Nothing is shared between sessions.

use serde::{Deserialize, Serialize};

use super::prompt::{Evaluation, PromptRequest, Refinement, DEFAULT_TARGET_MODEL};
use crate::domain::value_objects::{LengthTier, Page};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub page: Page,
    /// Insertion-ordered, no duplicates
    tags: Vec<String>,
    pub prompt: String,
    pub length: LengthTier,
    pub target_model: String,
    pub last_output: Option<String>,
    pub last_evaluation: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            tags: Vec::new(),
            prompt: String::new(),
            length: LengthTier::default(),
            target_model: DEFAULT_TARGET_MODEL.to_string(),
            last_output: None,
            last_evaluation: None,
        }
    }

    /// Sidebar selection
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// The one programmatic transition: from an evaluation result to Learn.
    /// Returns false (and stays put) when no evaluation has been shown yet.
    pub fn open_learn_from_evaluation(&mut self) -> bool {
        if self.last_evaluation.is_none() {
            return false;
        }
        self.page = Page::Learn;
        true
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a tag, returning false for blanks and duplicates
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Add every comma-separated tag in `input`; returns how many were new
    pub fn add_tags(&mut self, input: &str) -> usize {
        input.split(',').filter(|t| self.add_tag(t)).count()
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Snapshot the draft fields as a Refine request
    pub fn to_request(&self) -> PromptRequest {
        PromptRequest::new(self.prompt.clone())
            .with_length(self.length)
            .with_target_model(self.target_model.clone())
            .with_tags(self.tags.clone())
    }

    pub fn record_refinement(&mut self, refinement: &Refinement) {
        self.last_output = Some(refinement.refined_output().to_string());
    }

    pub fn record_evaluation(&mut self, evaluation: &Evaluation) {
        self.last_evaluation = Some(evaluation.text().to_string());
    }
}
