//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, EvaluateRequest, EvaluateResponse, FeedbackRequest, FeedbackResponse,
    RefineRequest, RefineResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::prompt::refine,
        super::prompt::evaluate,
        super::feedback::submit_feedback,
    ),
    components(schemas(
        RefineRequest,
        RefineResponse,
        EvaluateRequest,
        EvaluateResponse,
        FeedbackRequest,
        FeedbackResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Prompt", description = "Prompt refinement and evaluation"),
        (name = "Feedback", description = "Feedback relay")
    ),
    info(
        title = "PromptCraft API",
        description = "Refine and evaluate prompts with a hosted language model"
    )
)]
pub struct ApiDoc;
