//! PromptCraft API Models
//!
//! Request/response bodies of the JSON API.

mod feedback;
mod prompt;

pub use feedback::*;
pub use prompt::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every 4xx/5xx response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
