use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioContainer, LanguageCode, Transcript};

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Unavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        })
    }
}

fn upload_name(container: AudioContainer) -> (&'static str, &'static str) {
    match container {
        AudioContainer::WebM => ("audio.webm", "audio/webm"),
        AudioContainer::Ogg => ("audio.ogg", "audio/ogg"),
        AudioContainer::Flac => ("audio.flac", "audio/flac"),
        AudioContainer::Wav | AudioContainer::Unknown => ("audio.wav", "audio/wav"),
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioUnreadable(e.to_string()))?;
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        let (file_name, mime) = upload_name(AudioContainer::sniff(&audio));
        let file_part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {e}")))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.primary_subtag())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, %language, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {e}")))?;
        let transcript = transcript.trim();

        if transcript.is_empty() {
            return Err(TranscriptionError::NoSpeech);
        }

        tracing::info!(
            chars = transcript.len(),
            "OpenAI Whisper transcription completed"
        );

        Ok(Transcript::new(transcript.to_string()))
    }
}
