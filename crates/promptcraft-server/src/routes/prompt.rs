//! Prompt Routes - Refine and Evaluate
//!
//! Thin adapters: translate JSON into a PromptRequest, delegate to
//! PromptService, translate the outcome back.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use super::{api_error, json_body, ApiError};
use crate::models::{
    ErrorResponse, EvaluateRequest, EvaluateResponse, RefineRequest, RefineResponse,
};
use crate::AppState;

/// Refine a prompt for a target model
#[utoipa::path(
    post,
    path = "/refine",
    request_body = RefineRequest,
    responses(
        (status = 200, description = "Refined prompt", body = RefineResponse),
        (status = 400, description = "Prompt cannot be empty or body is not JSON", body = ErrorResponse),
        (status = 422, description = "Body does not match the schema", body = ErrorResponse),
        (status = 500, description = "Generation service failed", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn refine(
    State(state): State<AppState>,
    payload: Result<Json<RefineRequest>, JsonRejection>,
) -> Result<Json<RefineResponse>, ApiError> {
    let payload = json_body(payload)?;
    let refinement = state
        .prompt_service
        .refine(payload.into())
        .await
        .map_err(api_error)?;

    Ok(Json(refinement.into()))
}

/// Evaluate a prompt and suggest improvements
#[utoipa::path(
    post,
    path = "/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Evaluation feedback", body = EvaluateResponse),
        (status = 400, description = "Prompt cannot be empty or body is not JSON", body = ErrorResponse),
        (status = 422, description = "Body does not match the schema", body = ErrorResponse),
        (status = 500, description = "Generation service failed", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let payload = json_body(payload)?;
    let evaluation = state
        .prompt_service
        .evaluate(&payload.prompt)
        .await
        .map_err(api_error)?;

    Ok(Json(EvaluateResponse {
        evaluation: evaluation.result.normalized,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/refine", post(refine))
        .route("/evaluate", post(evaluate))
}
