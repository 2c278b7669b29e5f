//! HTTP Feedback Relay
//!
//! Posts feedback forms as JSON to an external collector (e.g. a script
//! endpoint) using reqwest. One attempt per submission.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::FeedbackConfig;
use crate::domain::{DomainError, FeedbackSubmission};
use crate::ports::FeedbackRelay;

/// HTTP implementation of FeedbackRelay
pub struct HttpFeedbackRelay {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpFeedbackRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self {
            timeout: config.timeout,
            ..Self::new(config.endpoint.clone())
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackRelay for HttpFeedbackRelay {
    async fn relay(&self, submission: &FeedbackSubmission) -> Result<(), DomainError> {
        let mut request = self.client.post(&self.endpoint).json(submission);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::relay(format!("Request failed: {e}")))?;

        // Only a plain 200 counts as accepted
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(DomainError::relay(format!(
                "Feedback endpoint responded with {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use axum::{extract::State, http::StatusCode as AxumStatus, routing::post, Json, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn spawn_collector(status: AxumStatus) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/exec",
                post(
                    move |State(received): State<Received>, Json(body): Json<Value>| async move {
                        received.lock().unwrap().push(body);
                        status
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{}/exec", addr), received)
    }

    fn submission() -> FeedbackSubmission {
        FeedbackSubmission::new("Great tool", Some(String::new()), Language::English).unwrap()
    }

    #[tokio::test]
    async fn test_relay_success_on_200() {
        let (endpoint, received) = spawn_collector(AxumStatus::OK).await;
        let relay = HttpFeedbackRelay::new(endpoint);

        relay.relay(&submission()).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            serde_json::json!({"feedback": "Great tool", "email": "", "language": "English"})
        );
    }

    #[tokio::test]
    async fn test_relay_failure_on_500() {
        let (endpoint, received) = spawn_collector(AxumStatus::INTERNAL_SERVER_ERROR).await;
        let relay = HttpFeedbackRelay::new(endpoint);

        let err = relay.relay(&submission()).await.unwrap_err();

        assert!(matches!(err, DomainError::Relay(_)));
        assert!(err.detail().contains("500"));
        // Sent once, no retry
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_relay_non_200_success_is_failure() {
        let (endpoint, _) = spawn_collector(AxumStatus::CREATED).await;
        let relay = HttpFeedbackRelay::new(endpoint);

        assert!(relay.relay(&submission()).await.is_err());
    }

    #[tokio::test]
    async fn test_relay_transport_error() {
        let relay = HttpFeedbackRelay::from_config(&FeedbackConfig {
            endpoint: "http://127.0.0.1:1/exec".to_string(),
            timeout: Some(Duration::from_secs(2)),
        });

        let err = relay.relay(&submission()).await.unwrap_err();
        assert!(matches!(err, DomainError::Relay(ref m) if m.starts_with("Request failed")));
    }
}
