//! Feedback Route - Relay the feedback form to the external collector

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use promptcraft::Language;

use super::{api_error, json_body, ApiError};
use crate::models::{ErrorResponse, FeedbackRequest, FeedbackResponse};
use crate::AppState;

/// Submit feedback
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Feedback relayed", body = FeedbackResponse),
        (status = 400, description = "Empty feedback, unknown language or malformed body", body = ErrorResponse),
        (status = 422, description = "Body does not match the schema", body = ErrorResponse),
        (status = 502, description = "Feedback endpoint rejected the submission", body = ErrorResponse),
        (status = 503, description = "Feedback is not configured", body = ErrorResponse)
    ),
    tag = "Feedback"
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let service = state.feedback_service.as_ref().ok_or((
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: "Feedback is not configured".to_string(),
        }),
    ))?;
    let payload = json_body(payload)?;

    let language: Language = payload
        .language
        .as_deref()
        .map(|s| s.parse::<Language>())
        .transpose()
        .map_err(|e: String| (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })))?
        .unwrap_or_default();

    service
        .submit(&payload.feedback, payload.email, language)
        .await
        .map_err(api_error)?;

    Ok(Json(FeedbackResponse {
        status: "ok".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/feedback", post(submit_feedback))
}
