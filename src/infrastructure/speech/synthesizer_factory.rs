use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::presentation::config::{SynthesisProvider, SynthesisSettings};

use super::espeak_synthesizer::EspeakSynthesizer;
use super::openai_speech_synthesizer::OpenAiSpeechSynthesizer;

pub struct SynthesizerFactory;

impl SynthesizerFactory {
    pub fn create(
        settings: &SynthesisSettings,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SynthesisError> {
        let timeout = Duration::from_secs(settings.timeout_secs);

        match settings.provider {
            SynthesisProvider::Espeak => {
                tracing::info!(binary = %settings.binary, "Using espeak-ng synthesizer");
                Ok(Arc::new(EspeakSynthesizer::new(
                    settings.binary.clone(),
                    settings.voice.clone(),
                    timeout,
                )))
            }
            SynthesisProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        SynthesisError::Unavailable("API key required for OpenAI speech".into())
                    })?;
                tracing::info!(model = ?settings.model, "Using OpenAI speech synthesizer");
                let synthesizer = OpenAiSpeechSynthesizer::new(
                    key,
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.voice.clone(),
                    timeout,
                )?;
                Ok(Arc::new(synthesizer))
            }
        }
    }
}
