/// Converts an audio container into canonical 16 kHz mono PCM WAV.
pub trait AudioTranscoder: Send + Sync {
    fn to_wav(&self, data: &[u8]) -> Result<Vec<u8>, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("resampling failed: {0}")]
    ResampleFailed(String),
    #[error("wav encoding failed: {0}")]
    EncodingFailed(String),
}
