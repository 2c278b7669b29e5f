//! Feedback Application Service

use std::sync::Arc;

use crate::domain::{DomainError, FeedbackSubmission, Language};
use crate::ports::FeedbackRelay;

/// Message shown to users whenever relaying fails, whatever the cause
pub const FEEDBACK_FAILURE_MESSAGE: &str = "Failed to submit feedback. Please try again later.";

pub struct FeedbackService<R: FeedbackRelay + ?Sized> {
    relay: Arc<R>,
}

impl<R: FeedbackRelay + ?Sized> FeedbackService<R> {
    pub fn new(relay: Arc<R>) -> Self {
        Self { relay }
    }

    /// Validate and forward one feedback form.
    ///
    /// Relay failures are logged with their cause and returned as a
    /// `DomainError::Relay` carrying only the generic message.
    pub async fn submit(
        &self,
        feedback: &str,
        email: Option<String>,
        language: Language,
    ) -> Result<(), DomainError> {
        let submission = FeedbackSubmission::new(feedback, email, language)?;

        match self.relay.relay(&submission).await {
            Ok(()) => {
                tracing::info!("Feedback relayed ({})", submission.language);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Feedback relay failed: {}", e);
                Err(DomainError::relay(FEEDBACK_FAILURE_MESSAGE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRelay {
        accept: bool,
        sent: Mutex<Vec<FeedbackSubmission>>,
    }

    #[async_trait]
    impl FeedbackRelay for MockRelay {
        async fn relay(&self, submission: &FeedbackSubmission) -> Result<(), DomainError> {
            self.sent.lock().unwrap().push(submission.clone());
            if self.accept {
                Ok(())
            } else {
                Err(DomainError::relay("endpoint responded with 500"))
            }
        }
    }

    fn relay(accept: bool) -> Arc<MockRelay> {
        Arc::new(MockRelay {
            accept,
            sent: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_submit_success() {
        let relay = relay(true);
        let service = FeedbackService::new(relay.clone());

        service
            .submit("Great tool", Some(String::new()), Language::English)
            .await
            .unwrap();

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].feedback, "Great tool");
        assert_eq!(sent[0].email, "");
    }

    #[tokio::test]
    async fn test_submit_failure_is_generic() {
        let service = FeedbackService::new(relay(false));

        let err = service
            .submit("Great tool", None, Language::French)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Relay(ref m) if m == FEEDBACK_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_blank_feedback_not_relayed() {
        let relay = relay(true);
        let service = FeedbackService::new(relay.clone());

        let err = service.submit("  ", None, Language::English).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(relay.sent.lock().unwrap().is_empty());
    }
}
