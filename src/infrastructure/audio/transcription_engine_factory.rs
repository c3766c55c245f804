use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProvider, TranscriptionSettings};

use super::google_speech_engine::GoogleSpeechEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;
use super::unavailable_engine::UnavailableEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let timeout = Duration::from_secs(settings.timeout_secs);

        match settings.provider {
            TranscriptionProvider::Google => {
                let key = require_api_key(settings, "Google Speech")?;
                tracing::info!("Using Google Speech recognizer");
                let engine = GoogleSpeechEngine::new(key, settings.base_url.clone(), timeout)?;
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::OpenAi => {
                let key = require_api_key(settings, "OpenAI Whisper")?;
                tracing::info!(model = ?settings.model, "Using OpenAI Whisper recognizer");
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Disabled => {
                tracing::info!("Backend recognition disabled, all requests will use browser fallback");
                Ok(Arc::new(UnavailableEngine::new(
                    "backend recognition is disabled",
                )))
            }
        }
    }
}

fn require_api_key(
    settings: &TranscriptionSettings,
    provider: &str,
) -> Result<String, TranscriptionError> {
    settings
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| TranscriptionError::Unavailable(format!("API key required for {provider}")))
}
