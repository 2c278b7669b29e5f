use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod models;
mod routes;

use promptcraft::{
    AppConfig, FeedbackRelay, FeedbackService, GeminiClient, GenerationService, HttpFeedbackRelay,
    PromptService,
};

/// Type aliases for application services behind trait objects
pub type AppPromptService = PromptService<dyn GenerationService>;
pub type AppFeedbackService = FeedbackService<dyn FeedbackRelay>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub feedback_service: Option<Arc<AppFeedbackService>>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let generator: Arc<dyn GenerationService> =
            Arc::new(GeminiClient::from_config(&config.generation));

        let feedback_service = config.feedback.as_ref().map(|feedback| {
            let relay: Arc<dyn FeedbackRelay> = Arc::new(HttpFeedbackRelay::from_config(feedback));
            Arc::new(FeedbackService::new(relay))
        });

        Self {
            prompt_service: Arc::new(PromptService::new(generator)),
            feedback_service,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "PromptCraft API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router with layers and state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::pages::router())
        .merge(routes::prompt::router())
        .merge(routes::feedback::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("✨ PromptCraft API initializing...");

    // A missing API key stops startup
    let config = AppConfig::from_lookup(|key| secrets.get(key)).map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        shuttle_runtime::Error::Custom(anyhow::Error::new(e).context("Failed to load configuration"))
    })?;

    tracing::info!("🤖 Generation model: {}", config.generation.model);

    match &config.feedback {
        Some(feedback) => tracing::info!("📮 Feedback relay → {}", feedback.endpoint),
        None => tracing::warn!("⚠️  No FEEDBACK_ENDPOINT set - feedback relay disabled"),
    }

    let router = app(AppState::from_config(&config));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ PromptCraft API ready");

    Ok(router.into())
}
