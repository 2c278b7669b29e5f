//! PromptCraft Domain Library
//!
//! Prompt refinement and evaluation shared by the HTTP API server and the
//! interactive CLI.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure entities and logic
//!   - `entities/`: PromptRequest, GenerationResult, FeedbackSubmission, SessionState
//!   - `value_objects/`: LengthTier, Language, Page
//!   - `services/`: Instruction composition and output normalization
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): GenerationService and FeedbackRelay traits
//!
//! - **Application** (`application/`): Refine / Evaluate / feedback use cases
//!
//! - **Adapters** (`adapters/`): Gemini client and HTTP feedback relay
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use promptcraft::{GeminiClient, PromptRequest, PromptService};
//!
//! let service = PromptService::new(Arc::new(GeminiClient::new(api_key)));
//! let refinement = service.refine(PromptRequest::new("Explain recursion")).await?;
//! println!("{}", refinement.refined_output());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::{GeminiClient, GeminiError, HttpFeedbackRelay};
pub use application::{FeedbackService, PromptService, FEEDBACK_FAILURE_MESSAGE};
pub use config::{AppConfig, ConfigError, FeedbackConfig, GenerationConfig};
pub use domain::{
    DomainError, Evaluation, FeedbackSubmission, GenerationInstruction, GenerationResult,
    Language, LengthTier, Page, PromptRequest, Refinement, SessionState, DEFAULT_TARGET_MODEL,
};
pub use ports::{FeedbackRelay, GenerationService};
