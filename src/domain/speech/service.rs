use super::dto::SpeechRequest;
use super::error::SpeechServiceError;
use super::transform;
use super::voices::VoiceGender;
use crate::infrastructure::repositories::{ProviderError, SpeechRepository};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Media type of audio produced by the ladder providers
pub const LADDER_MEDIA_TYPE: &str = "audio/mpeg";

/// Media type of audio produced by the override provider
pub const OVERRIDE_MEDIA_TYPE: &str = "audio/wav";

const OVERRIDE_PROVIDER_NAME: &str = "openai-audio";

/// How a tier's input text is shaped before the adapter sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// Plain prose behind a persona preamble
    Narrative,
    /// Speech markup with inserted pause directives
    Markup,
}

/// One ranked provider in the fallback ladder. Position in the
/// service's tier vector is the rank.
#[derive(Clone)]
pub struct Tier {
    pub name: &'static str,
    pub mode: ContentMode,
    pub repo: Arc<dyn SpeechRepository>,
}

impl Tier {
    pub fn new(name: &'static str, mode: ContentMode, repo: Arc<dyn SpeechRepository>) -> Self {
        Self { name, mode, repo }
    }
}

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub media_type: &'static str,
    pub provider: &'static str,
}

/// Walks the fixed provider ladder until one tier delivers audio.
///
/// Tiers are attempted strictly in order, once each, with no backoff
/// between them. Every adapter failure is fallback-eligible; only the
/// aggregate outcome crosses the service boundary.
pub struct SpeechService {
    tiers: Vec<Tier>,
    override_repo: Arc<dyn SpeechRepository>,
    provider_timeout: Duration,
}

impl SpeechService {
    pub fn new(
        tiers: Vec<Tier>,
        override_repo: Arc<dyn SpeechRepository>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            tiers,
            override_repo,
            provider_timeout,
        }
    }

    pub async fn synthesize(
        &self,
        request: SpeechRequest,
    ) -> Result<SynthesisResult, SpeechServiceError> {
        let SpeechRequest {
            text,
            gender,
            use_override_provider,
        } = request;

        if text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            text_length = text.len(),
            gender = ?gender,
            use_override_provider,
            "Speech synthesis request"
        );

        if use_override_provider {
            let input = transform::narrative(&text);
            match self.attempt(&*self.override_repo, &input, gender).await {
                Ok(audio_data) => {
                    tracing::info!(
                        provider = OVERRIDE_PROVIDER_NAME,
                        audio_size = audio_data.len(),
                        "Override provider synthesis succeeded"
                    );
                    return Ok(SynthesisResult {
                        audio_data,
                        media_type: OVERRIDE_MEDIA_TYPE,
                        provider: OVERRIDE_PROVIDER_NAME,
                    });
                }
                Err(e) => {
                    // Swallowed: an unavailable override degrades into the
                    // default ladder instead of failing the request.
                    tracing::warn!(
                        provider = OVERRIDE_PROVIDER_NAME,
                        error = %e,
                        "Override provider failed, falling back to the default ladder"
                    );
                }
            }
        }

        for (rank, tier) in self.tiers.iter().enumerate() {
            let input = match tier.mode {
                ContentMode::Narrative => transform::narrative(&text),
                ContentMode::Markup => transform::meditation_markup(&text),
            };

            match self.attempt(&*tier.repo, &input, gender).await {
                Ok(audio_data) => {
                    tracing::info!(
                        tier = tier.name,
                        rank,
                        audio_size = audio_data.len(),
                        "Tier synthesis succeeded"
                    );
                    return Ok(SynthesisResult {
                        audio_data,
                        media_type: LADDER_MEDIA_TYPE,
                        provider: tier.name,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        tier = tier.name,
                        rank,
                        error = %e,
                        "Tier failed, trying next"
                    );
                }
            }
        }

        tracing::error!(tiers = self.tiers.len(), "Every voice tier failed");
        Err(SpeechServiceError::AllTiersExhausted)
    }

    /// One provider attempt under a bounded deadline. A stalled provider
    /// must not hold up the rest of the ladder.
    async fn attempt(
        &self,
        repo: &dyn SpeechRepository,
        text: &str,
        gender: VoiceGender,
    ) -> Result<Vec<u8>, ProviderError> {
        timeout(self.provider_timeout, repo.synthesize(text, gender))
            .await
            .map_err(|_| ProviderError::Timeout(self.provider_timeout))?
    }
}
