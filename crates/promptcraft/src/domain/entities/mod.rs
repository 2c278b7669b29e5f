//! Domain Entities
//!
//! Transient, in-memory models. Nothing here is persisted.
//! - PromptRequest: Input to the Refine operation
//! - GenerationInstruction / GenerationResult: What goes to and comes back from the model
//! - FeedbackSubmission: Feedback form payload
//! - SessionState: Interactive session bookkeeping

mod feedback;
mod prompt;
mod session;

pub use feedback::*;
pub use prompt::*;
pub use session::*;
