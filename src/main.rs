use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stillpoint_backend::controllers::speech::SpeechController;
use stillpoint_backend::domain::speech::{ContentMode, SpeechService, Tier, VoiceTier};
use stillpoint_backend::infrastructure::config::{Config, LogFormat};
use stillpoint_backend::infrastructure::http::start_http_server;
use stillpoint_backend::infrastructure::repositories::{
    CloudTtsSpeechRepository, GeminiSpeechRepository, OpenAiAudioSpeechRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Stillpoint Backend on {}:{}",
        config.host,
        config.port
    );

    // Credential check (a missing key parks that provider, the ladder
    // degrades around it)
    tracing::info!(
        gemini = config.gemini_api_key.is_some(),
        cloud_tts = config.cloud_tts_api_key.is_some(),
        openai = config.openai_api_key.is_some(),
        "Voice provider credential check"
    );
    if !config.any_ladder_provider_configured() {
        tracing::warn!("No ladder provider credential found. Every synthesis request will fail until one is configured");
    }

    let provider_timeout = Duration::from_secs(config.provider_timeout_secs);

    // Shared HTTP client for all providers, safe for concurrent reuse
    let http_client = reqwest::Client::builder()
        .timeout(provider_timeout)
        .build()?;

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories (inject the shared HTTP client)
    tracing::info!("Instantiating voice provider repositories...");
    let generative = Arc::new(GeminiSpeechRepository::new(
        http_client.clone(),
        config.gemini_api_key.clone(),
    ));
    let studio = Arc::new(CloudTtsSpeechRepository::new(
        http_client.clone(),
        config.cloud_tts_api_key.clone(),
        VoiceTier::Studio,
    ));
    let neural = Arc::new(CloudTtsSpeechRepository::new(
        http_client.clone(),
        config.cloud_tts_api_key.clone(),
        VoiceTier::Neural,
    ));
    let chat_audio = Arc::new(OpenAiAudioSpeechRepository::new(
        http_client,
        config.openai_api_key.clone(),
    ));

    // 2. Instantiate the service. Ladder order is the deployment's
    // preference order: most expressive first, most available last.
    tracing::info!("Instantiating speech service...");
    let speech_service = Arc::new(SpeechService::new(
        vec![
            Tier::new("gemini-generative", ContentMode::Narrative, generative),
            Tier::new("cloud-tts-studio", ContentMode::Markup, studio),
            Tier::new("cloud-tts-neural", ContentMode::Markup, neural),
        ],
        chat_audio,
        provider_timeout,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(SpeechController::new(speech_service));

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(config, speech_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "stillpoint_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "stillpoint_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
