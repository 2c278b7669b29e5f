//! Feedback Relay Port
//!
//! Forwards a feedback form to an external collector. Fire-and-forget:
//! one attempt, nothing is queued or stored when it fails.

use async_trait::async_trait;

use crate::domain::entities::FeedbackSubmission;
use crate::domain::errors::DomainError;

#[async_trait]
pub trait FeedbackRelay: Send + Sync {
    /// Send the submission once.
    ///
    /// `Ok(())` only when the endpoint acknowledged it; anything else is
    /// `DomainError::Relay`.
    async fn relay(&self, submission: &FeedbackSubmission) -> Result<(), DomainError>;
}
