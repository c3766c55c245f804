use async_trait::async_trait;

use crate::domain::VoiceSettings;

/// Text-to-speech engine producing a complete WAV file.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesizer unavailable: {0}")]
    Unavailable(String),
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),
    #[error("synthesis timed out after {0} seconds")]
    TimedOut(u64),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
