//! PromptCraft API Routes
//!
//! - / , /feedback, /about, /technique, /learn - Static pages
//! - /refine - Prompt refinement
//! - /evaluate - Prompt evaluation
//! - /feedback (POST) - Feedback relay

pub mod feedback;
pub mod pages;
pub mod prompt;
pub mod swagger;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use promptcraft::DomainError;

use crate::models::ErrorResponse;

/// Error half of every JSON handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map domain failures onto status codes; the message goes out as `{error}`
pub fn api_error(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::ExternalService(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Relay(_) => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.detail().to_string(),
        }),
    )
}

/// Unwrap a JSON body; rejected bodies keep axum's status but answer `{error}`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        (
            rejection.status(),
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })
}
