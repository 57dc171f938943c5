use crate::error::AppError;

/// Fixed user-facing message when every voice tier has failed. Provider
/// detail stays in the logs.
pub const DEGRADED_SERVICE_MESSAGE: &str =
    "Voice narration is temporarily unavailable. Please try again in a few minutes.";

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("all voice tiers exhausted")]
    AllTiersExhausted,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::AllTiersExhausted => {
                AppError::ServiceUnavailable(DEGRADED_SERVICE_MESSAGE.to_string())
            }
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
