use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{LanguageCode, Transcript};

/// Stands in when no recognizer is configured; every call fails so callers
/// receive the browser fallback signal.
pub struct UnavailableEngine {
    reason: String,
}

impl UnavailableEngine {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for UnavailableEngine {
    async fn transcribe(
        &self,
        _audio_path: &Path,
        _language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::Unavailable(self.reason.clone()))
    }
}
