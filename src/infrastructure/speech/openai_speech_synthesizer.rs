use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::{DEFAULT_RATE_WPM, VoiceSettings};

const MIN_SPEED: f32 = 0.25;
const MAX_SPEED: f32 = 4.0;

/// Hosted synthesis against an OpenAI-compatible `/audio/speech` endpoint.
///
/// The API has no loudness control, so [`VoiceSettings::volume`] is ignored.
pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'static str,
    speed: f32,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        voice: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SynthesisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SynthesisError::Unavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "tts-1".to_string()),
            voice: voice.unwrap_or_else(|| "alloy".to_string()),
        })
    }
}

/// Maps words-per-minute onto the API's speed multiplier.
pub fn speed_multiplier(rate_wpm: u32) -> f32 {
    (rate_wpm as f32 / DEFAULT_RATE_WPM as f32).clamp(MIN_SPEED, MAX_SPEED)
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));
        let body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "wav",
            speed: speed_multiplier(settings.rate_wpm()),
        };

        tracing::debug!(model = %self.model, voice = %self.voice, "Sending text to OpenAI speech API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let wav = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {e}")))?;

        Ok(wav.to_vec())
    }
}
