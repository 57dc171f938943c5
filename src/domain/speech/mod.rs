pub mod dto;
pub mod error;
pub mod service;
pub mod transform;
pub mod voices;

pub use dto::SpeechRequest;
pub use error::{SpeechServiceError, DEGRADED_SERVICE_MESSAGE};
pub use service::{
    ContentMode, SpeechService, SynthesisResult, Tier, LADDER_MEDIA_TYPE, OVERRIDE_MEDIA_TYPE,
};
pub use voices::{voice_for, VoiceGender, VoiceTier};
