use serde::{Deserialize, Serialize};

/// Requested voice gender, defaulting to the app's standard narrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoiceGender {
    Male,
    #[default]
    Female,
}

/// Ranked voice families of the fallback ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTier {
    /// Generative multimodal voice, most expressive
    Generative,
    /// High-fidelity studio voice
    Studio,
    /// Neural voice, most available
    Neural,
}

/// Static voice table, consulted once per adapter invocation.
/// Voice identifiers are provider-specific and fixed per deployment.
pub fn voice_for(tier: VoiceTier, gender: VoiceGender) -> &'static str {
    match (tier, gender) {
        (VoiceTier::Generative, VoiceGender::Female) => "Sulafat",
        (VoiceTier::Generative, VoiceGender::Male) => "Charon",
        (VoiceTier::Studio, VoiceGender::Female) => "en-US-Studio-O",
        (VoiceTier::Studio, VoiceGender::Male) => "en-US-Studio-Q",
        (VoiceTier::Neural, VoiceGender::Female) => "en-US-Neural2-F",
        (VoiceTier::Neural, VoiceGender::Male) => "en-US-Neural2-D",
    }
}
