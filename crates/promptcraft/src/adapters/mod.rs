//! Infrastructure Adapters
//!
//! Implementations of the ports for external systems, using reqwest.

pub mod feedback_relay;
pub mod gemini;

// Re-exports
pub use feedback_relay::HttpFeedbackRelay;
pub use gemini::{GeminiClient, GeminiError};
