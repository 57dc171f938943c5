pub mod cloud_tts_speech_repository;
pub mod gemini_speech_repository;
pub mod openai_audio_speech_repository;
pub mod speech_repository;

pub use cloud_tts_speech_repository::CloudTtsSpeechRepository;
pub use gemini_speech_repository::GeminiSpeechRepository;
pub use openai_audio_speech_repository::OpenAiAudioSpeechRepository;
pub use speech_repository::{ProviderError, SpeechRepository};
