use super::speech_repository::{ProviderError, SpeechRepository};
use crate::domain::speech::VoiceGender;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use serde_json::json;

const OPENAI_API_BASE: &str = "https://api.openai.com";
const AUDIO_CHAT_MODEL: &str = "gpt-4o-audio-preview";

/// The override path uses one fixed voice regardless of the requested gender
const OVERRIDE_VOICE: &str = "sage";

/// OpenAI audio-chat implementation of the speech repository
///
/// The alternate override provider, outside the default ladder. Sends
/// the narrative payload through the chat-completions interface with an
/// audio modality and a fixed voice, and decodes the WAV payload nested
/// in the message's audio field.
pub struct OpenAiAudioSpeechRepository {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiAudioSpeechRepository {
    pub fn new(client: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    /// Point the repository at a different endpoint (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn extract_audio(response: ChatCompletionResponse) -> Result<Vec<u8>, ProviderError> {
        let data = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.audio)
            .and_then(|audio| audio.data)
            .filter(|data| !data.is_empty())
            .ok_or(ProviderError::NoAudioData)?;

        Ok(BASE64.decode(data)?)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    audio: Option<MessageAudio>,
}

#[derive(Debug, Deserialize)]
struct MessageAudio {
    data: Option<String>,
}

#[async_trait]
impl SpeechRepository for OpenAiAudioSpeechRepository {
    async fn synthesize(&self, text: &str, _gender: VoiceGender) -> Result<Vec<u8>, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("OPENAI_API_KEY"))?;

        let body = json!({
            "model": AUDIO_CHAT_MODEL,
            "modalities": ["text", "audio"],
            "audio": { "voice": OVERRIDE_VOICE, "format": "wav" },
            "messages": [{ "role": "user", "content": text }]
        });

        tracing::info!(
            model = AUDIO_CHAT_MODEL,
            voice = OVERRIDE_VOICE,
            text_length = text.len(),
            "Calling OpenAI audio chat"
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "OpenAI audio chat call failed"
            );
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let audio = Self::extract_audio(parsed)?;

        tracing::debug!(audio_size = audio.len(), "OpenAI audio decoded");

        Ok(audio)
    }
}
