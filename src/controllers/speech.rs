use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechRequest, SpeechService},
    error::{AppError, AppResult},
};

/// Longest entry the app will narrate in one request
const MAX_TEXT_CHARS: usize = 10_000;

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/speech/synthesize - Convert text to spoken audio
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Validate input before any provider is involved
        let char_count = request.text.chars().count();

        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        if char_count > MAX_TEXT_CHARS {
            return Err(AppError::PayloadTooLarge(
                "Text must be 10,000 characters or less".to_string(),
            ));
        }

        // Walk the provider ladder
        let result = controller
            .speech_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        // Build headers; content type depends on which path served the audio
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, result.media_type.parse().unwrap());
        headers.insert(
            "X-Character-Count",
            char_count.to_string().parse().unwrap(),
        );
        headers.insert("X-Voice-Provider", result.provider.parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
