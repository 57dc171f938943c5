use super::speech_repository::{ProviderError, SpeechRepository};
use crate::domain::speech::{voice_for, VoiceGender, VoiceTier};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Gemini generative-voice implementation of the speech repository
///
/// First rung of the ladder: the most expressive voice. The request asks
/// the content-generation interface for audio output with an explicit
/// voice selection, and the same voice is named in a style directive
/// embedded in the prompt. The audio comes back as one inline base64
/// part among the response parts.
pub struct GeminiSpeechRepository {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiSpeechRepository {
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the repository at a different endpoint (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Locate the response part carrying inline audio and decode it
    fn extract_audio(response: GenerateContentResponse) -> Result<Vec<u8>, ProviderError> {
        let inline = response
            .candidates
            .into_iter()
            .flatten()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.inline_data)
            .ok_or(ProviderError::AudioPartNotFound)?;

        if inline.data.is_empty() {
            return Err(ProviderError::AudioPartNotFound);
        }

        tracing::debug!(mime_type = %inline.mime_type, "Inline audio part located");

        Ok(BASE64.decode(inline.data)?)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType", default)]
    mime_type: String,
    data: String,
}

#[async_trait]
impl SpeechRepository for GeminiSpeechRepository {
    async fn synthesize(&self, text: &str, gender: VoiceGender) -> Result<Vec<u8>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("GEMINI_API_KEY"))?;

        let voice = voice_for(VoiceTier::Generative, gender);

        // The voice directive rides inside the prompt; the speech config
        // names the same voice for the structural selection.
        let prompt = format!("Narrate in the voice called {}.\n\n{}", voice, text);

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": voice } }
                }
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_TTS_MODEL, api_key
        );

        tracing::info!(
            voice,
            model = GEMINI_TTS_MODEL,
            text_length = text.len(),
            "Calling Gemini generative voice"
        );

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice,
                "Gemini generative voice call failed"
            );
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let audio = Self::extract_audio(parsed)?;

        tracing::debug!(audio_size = audio.len(), "Gemini audio decoded");

        Ok(audio)
    }
}
