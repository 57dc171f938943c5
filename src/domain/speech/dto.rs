use serde::{Deserialize, Serialize};

use super::voices::VoiceGender;

/// Request for POST /api/speech/synthesize
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub gender: VoiceGender,
    #[serde(default)]
    pub use_override_provider: bool,
}
