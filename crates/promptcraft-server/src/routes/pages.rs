//! Page Routes - Static HTML

use axum::{response::Html, routing::get, Router};

use crate::AppState;

async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

async fn feedback_page() -> Html<&'static str> {
    Html(include_str!("../../templates/feedback.html"))
}

async fn about_page() -> Html<&'static str> {
    Html(include_str!("../../templates/about.html"))
}

async fn technique_page() -> Html<&'static str> {
    Html(include_str!("../../templates/technique.html"))
}

async fn learn_page() -> Html<&'static str> {
    Html(include_str!("../../templates/learn.html"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/feedback", get(feedback_page))
        .route("/about", get(about_page))
        .route("/technique", get(technique_page))
        .route("/learn", get(learn_page))
}
