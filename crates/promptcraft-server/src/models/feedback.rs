//! Feedback request and response bodies

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: String,
    pub email: Option<String>,
    /// English, Spanish, French or Hindi (default English)
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub status: String,
}
