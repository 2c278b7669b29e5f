//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or empty user input; the caller can correct it
    #[error("Validation error: {0}")]
    Validation(String),

    /// The generation call failed (transport, quota, malformed response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Feedback could not be forwarded
    #[error("Relay error: {0}")]
    Relay(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalService(message.into())
    }

    pub fn relay(message: impl Into<String>) -> Self {
        Self::Relay(message.into())
    }

    /// The message without the category prefix
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::ExternalService(msg) | Self::Relay(msg) => msg,
        }
    }
}
