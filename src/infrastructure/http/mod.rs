use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, speech::SpeechController};
use crate::infrastructure::config::Config;

pub mod request_id;

use request_id::request_id_middleware;

/// Build the application router
///
/// Shared with the integration tests so they exercise the same
/// middleware stack as production.
pub fn build_router(config: Arc<Config>, speech_controller: Arc<SpeechController>) -> Router {
    let speech_routes = Router::new()
        .route(
            "/api/speech/synthesize",
            post(SpeechController::synthesize),
        )
        .with_state(speech_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
