//! Generation Service Port
//!
//! Abstract interface for the hosted language model. Given an instruction,
//! return text. The output is treated as opaque prose.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Generation service interface
///
/// # Example
///
/// ```rust,ignore
/// use promptcraft::ports::GenerationService;
///
/// struct EchoModel;
///
/// #[async_trait]
/// impl GenerationService for EchoModel {
///     async fn generate(&self, instruction: &str) -> Result<String, DomainError> {
///         Ok(instruction.to_string())
///     }
///
///     fn model_id(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate text for a composed instruction.
    ///
    /// Failures of any kind (transport, quota, blocked or malformed
    /// response) come back as `DomainError::ExternalService`.
    async fn generate(&self, instruction: &str) -> Result<String, DomainError>;

    /// Model backing this service (e.g., "gemini-1.5-flash")
    fn model_id(&self) -> &str;
}
