use super::speech_repository::{ProviderError, SpeechRepository};
use crate::domain::speech::{voice_for, VoiceGender, VoiceTier};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::json;

const CLOUD_TTS_API_BASE: &str = "https://texttospeech.googleapis.com";

// Fixed audio shaping for the meditation voices: pitched down for
// resonance, slowed, with a slight gain boost. Constants of the
// deployment, never derived from input.
const SPEAKING_RATE: f64 = 0.85;
const PITCH_SEMITONES: f64 = -2.0;
const VOLUME_GAIN_DB: f64 = 2.0;

/// Google Cloud Text-to-Speech implementation of the speech repository
///
/// Serves both the studio and the neural rungs of the ladder: one
/// synthesis routine, parameterized by the voice tier it is constructed
/// with. Input is speech markup; audio comes back base64-encoded in
/// `audioContent`.
pub struct CloudTtsSpeechRepository {
    client: reqwest::Client,
    api_key: Option<String>,
    tier: VoiceTier,
    base_url: String,
}

impl CloudTtsSpeechRepository {
    pub fn new(client: reqwest::Client, api_key: Option<String>, tier: VoiceTier) -> Self {
        Self {
            client,
            api_key,
            tier,
            base_url: CLOUD_TTS_API_BASE.to_string(),
        }
    }

    /// Point the repository at a different endpoint (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn extract_audio(response: SynthesizeResponse) -> Result<Vec<u8>, ProviderError> {
        let content = response
            .audio_content
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::NoAudioData)?;

        Ok(BASE64.decode(content)?)
    }
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
}

#[async_trait]
impl SpeechRepository for CloudTtsSpeechRepository {
    async fn synthesize(&self, text: &str, gender: VoiceGender) -> Result<Vec<u8>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("CLOUD_TTS_API_KEY"))?;

        let voice = voice_for(self.tier, gender);

        let body = json!({
            "input": { "ssml": text },
            "voice": { "languageCode": "en-US", "name": voice },
            "audioConfig": {
                "audioEncoding": "MP3",
                "speakingRate": SPEAKING_RATE,
                "pitch": PITCH_SEMITONES,
                "volumeGainDb": VOLUME_GAIN_DB
            }
        });

        let url = format!("{}/v1/text:synthesize?key={}", self.base_url, api_key);

        tracing::info!(
            voice,
            tier = ?self.tier,
            text_length = text.len(),
            "Calling Cloud TTS synthesize"
        );

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice,
                "Cloud TTS call failed"
            );
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SynthesizeResponse = response.json().await?;
        let audio = Self::extract_audio(parsed)?;

        tracing::debug!(audio_size = audio.len(), "Cloud TTS audio decoded");

        Ok(audio)
    }
}
