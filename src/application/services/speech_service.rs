use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::VoiceSettings;

pub struct SynthesizedSpeech {
    pub wav: Vec<u8>,
    /// Length of the input text in Unicode scalar values.
    pub text_length: usize,
}

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<SynthesizedSpeech, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let text_length = text.chars().count();
        tracing::info!(
            text_length,
            rate = settings.rate_wpm(),
            volume = settings.volume(),
            "Converting text to speech"
        );

        let wav = self.synthesizer.synthesize(text, settings).await?;
        if wav.is_empty() {
            return Err(SpeechError::Synthesis(SynthesisError::SynthesisFailed(
                "synthesizer produced no audio".to_string(),
            )));
        }

        tracing::debug!(bytes = wav.len(), "Speech synthesized");

        Ok(SynthesizedSpeech { wav, text_length })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Text is empty")]
    EmptyText,
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
