use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::application::ports::{AudioTranscoder, TranscriptionEngine};
use crate::domain::{
    AudioConversion, AudioPayload, AudioPayloadError, LanguageCode, TranscriptionOutcome,
};

const STAGED_AUDIO_PREFIX: &str = "sabda-audio-";

pub struct TranscriptionRequest {
    pub payload: AudioPayload,
    pub language: Option<String>,
}

struct PreparedAudio {
    bytes: Vec<u8>,
    conversion: AudioConversion,
}

pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    transcoder: Arc<dyn AudioTranscoder>,
    source_format: String,
}

impl TranscriptionService {
    /// `source_format` is the container assumed for inline audio, used as the
    /// staged file extension when transcoding falls through.
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        transcoder: Arc<dyn AudioTranscoder>,
        source_format: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            transcoder,
            source_format: source_format.into(),
        }
    }

    #[tracing::instrument(skip(self, request), fields(shape = request.payload.shape()))]
    pub async fn transcribe(
        &self,
        request: TranscriptionRequest,
    ) -> Result<TranscriptionOutcome, TranscribeError> {
        let language = LanguageCode::normalize(request.language.as_deref());
        if let Some(requested) = request
            .language
            .as_deref()
            .filter(|tag| !LanguageCode::is_supported(tag))
        {
            tracing::debug!(requested, fallback = %language, "Unsupported language tag");
        }

        let upload_extension = request.payload.upload_extension();
        let bytes = request.payload.into_bytes()?;
        tracing::debug!(bytes = bytes.len(), %language, "Audio payload decoded");

        let prepared = self.prepare(bytes).await;
        let conversion = prepared.conversion;
        let extension = match conversion {
            AudioConversion::Transcoded => "wav".to_string(),
            AudioConversion::Passthrough => {
                upload_extension.unwrap_or_else(|| self.source_format.clone())
            }
        };

        let staged = stage_audio(&prepared.bytes, &extension)?;
        tracing::debug!(
            path = %staged.path().display(),
            %conversion,
            "Audio staged for recognition"
        );

        let outcome = match self.engine.transcribe(staged.path(), language).await {
            Ok(transcript) if !transcript.text.trim().is_empty() => {
                tracing::info!(
                    chars = transcript.text.len(),
                    %language,
                    %conversion,
                    "Transcribed audio using backend"
                );
                TranscriptionOutcome::Recognized {
                    transcript,
                    language,
                    conversion,
                }
            }
            Ok(_) => {
                tracing::warn!(%language, "Recognizer returned no text, signalling browser fallback");
                TranscriptionOutcome::Fallback {
                    language,
                    conversion,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, %language, "Backend recognition failed, signalling browser fallback");
                TranscriptionOutcome::Fallback {
                    language,
                    conversion,
                }
            }
        };

        drop(staged);

        Ok(outcome)
    }

    async fn prepare(&self, bytes: Vec<u8>) -> PreparedAudio {
        let original = Arc::new(bytes);
        let input = Arc::clone(&original);
        let transcoder = Arc::clone(&self.transcoder);

        let result = tokio::task::spawn_blocking(move || transcoder.to_wav(&input)).await;

        match result {
            Ok(Ok(wav)) => PreparedAudio {
                bytes: wav,
                conversion: AudioConversion::Transcoded,
            },
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Audio conversion failed, falling back to original audio");
                passthrough(original)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Audio conversion task aborted, falling back to original audio");
                passthrough(original)
            }
        }
    }
}

fn passthrough(original: Arc<Vec<u8>>) -> PreparedAudio {
    PreparedAudio {
        bytes: Arc::try_unwrap(original).unwrap_or_else(|shared| (*shared).clone()),
        conversion: AudioConversion::Passthrough,
    }
}

fn stage_audio(bytes: &[u8], extension: &str) -> std::io::Result<NamedTempFile> {
    let extension = if !extension.is_empty()
        && extension.len() <= 8
        && extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        extension
    } else {
        "bin"
    };

    let mut file = tempfile::Builder::new()
        .prefix(STAGED_AUDIO_PREFIX)
        .suffix(&format!(".{extension}"))
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error(transparent)]
    Payload(#[from] AudioPayloadError),
    #[error("failed to stage audio: {0}")]
    Staging(#[from] std::io::Error),
}
