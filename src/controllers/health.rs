use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    let providers = json!({
        "generative": config.gemini_api_key.is_some(),
        "studio": config.cloud_tts_api_key.is_some(),
        "neural": config.cloud_tts_api_key.is_some(),
        "override": config.openai_api_key.is_some(),
    });

    if config.any_ladder_provider_configured() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "providers": providers
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "providers": providers
            })),
        )
    }
}
