use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioContainer, LanguageCode, Transcript};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com/v1";
const OPUS_SAMPLE_RATE: u32 = 48_000;

/// Google Cloud Speech-to-Text `speech:recognize` over REST.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleSpeechEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Unavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/speech:recognize", base_url.trim_end_matches('/')),
            api_key,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate_hertz: Option<u32>,
    enable_automatic_punctuation: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize, Default)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

/// WAV and FLAC carry their own header; Opus containers need explicit hints.
fn encoding_for(container: AudioContainer) -> (Option<&'static str>, Option<u32>) {
    match container {
        AudioContainer::WebM => (Some("WEBM_OPUS"), Some(OPUS_SAMPLE_RATE)),
        AudioContainer::Ogg => (Some("OGG_OPUS"), Some(OPUS_SAMPLE_RATE)),
        AudioContainer::Flac => (Some("FLAC"), None),
        AudioContainer::Wav | AudioContainer::Unknown => (None, None),
    }
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioUnreadable(e.to_string()))?;

        let container = AudioContainer::sniff(&audio);
        let (encoding, sample_rate_hertz) = encoding_for(container);

        let body = RecognizeRequest {
            config: RecognitionConfig {
                language_code: language.as_str(),
                encoding,
                sample_rate_hertz,
                enable_automatic_punctuation: true,
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(&audio),
            },
        };

        tracing::debug!(
            bytes = audio.len(),
            container = ?container,
            %language,
            "Sending audio to Google Speech"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
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

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("parse response: {e}")))?;

        let best: Vec<&RecognitionAlternative> = result
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .collect();

        let text = best
            .iter()
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.is_empty() {
            return Err(TranscriptionError::NoSpeech);
        }

        tracing::info!(chars = text.len(), "Google Speech transcription completed");

        Ok(match best.first().and_then(|a| a.confidence) {
            Some(confidence) => Transcript::with_confidence(text, confidence),
            None => Transcript::new(text),
        })
    }
}
