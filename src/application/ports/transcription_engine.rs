use std::path::Path;

use async_trait::async_trait;

use crate::domain::{LanguageCode, Transcript};

/// Speech recognizer. Implementations must be safe to share across requests.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("failed to read staged audio: {0}")]
    AudioUnreadable(String),
    #[error("no speech recognized")]
    NoSpeech,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("recognizer unavailable: {0}")]
    Unavailable(String),
}
