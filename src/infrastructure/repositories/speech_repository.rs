use crate::domain::speech::VoiceGender;
use async_trait::async_trait;
use std::time::Duration;

/// Repository for voice synthesis operations.
/// Abstracts the underlying provider (Gemini, Google Cloud TTS, OpenAI audio, etc.)
///
/// Implementations are responsible for:
/// - Building the provider-specific request from provider-ready text
/// - Resolving their own credential, failing fast when it is missing
/// - Locating and decoding the audio payload in the provider's response shape
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize provider-ready text into one complete audio buffer
    ///
    /// # Arguments
    /// * `text` - Text already shaped for this provider (narrative prose or speech markup)
    /// * `gender` - Selects the voice through the static voice table
    ///
    /// # Errors
    /// Returns a `ProviderError` if the credential is missing, the call
    /// fails, or the response carries no usable audio
    async fn synthesize(&self, text: &str, gender: VoiceGender) -> Result<Vec<u8>, ProviderError>;
}

/// Failure of a single provider attempt.
///
/// Every variant is fallback-eligible: the orchestrator treats them all
/// the same and advances the ladder.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("credential {0} is not configured")]
    MissingCredential(&'static str),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("no response part carried inline audio data")]
    AudioPartNotFound,

    #[error("response carried no audio data")]
    NoAudioData,

    #[error("audio payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
}
