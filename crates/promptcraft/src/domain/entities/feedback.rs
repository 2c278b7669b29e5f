//! Feedback - Payload forwarded by the feedback relay

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Language;

/// FeedbackSubmission - Serializes to `{feedback, email, language}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub feedback: String,
    /// Empty when the user left it blank
    pub email: String,
    pub language: Language,
}

impl FeedbackSubmission {
    /// Build a submission, rejecting blank feedback text
    pub fn new(
        feedback: impl Into<String>,
        email: Option<String>,
        language: Language,
    ) -> Result<Self, DomainError> {
        let feedback = feedback.into();
        if feedback.trim().is_empty() {
            return Err(DomainError::validation("Feedback cannot be empty"));
        }

        Ok(Self {
            feedback,
            email: email.map(|e| e.trim().to_string()).unwrap_or_default(),
            language,
        })
    }
}
