//! Application Services (Use Cases)
//!
//! The operations every front-end calls: Refine, Evaluate, and feedback
//! submission. Front-ends only translate their input and output.

mod feedback_service;
mod prompt_service;

pub use feedback_service::{FeedbackService, FEEDBACK_FAILURE_MESSAGE};
pub use prompt_service::PromptService;
