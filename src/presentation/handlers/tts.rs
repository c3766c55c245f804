use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::SpeechError;
use crate::domain::VoiceSettings;
use crate::infrastructure::observability::preview_for_log;
use crate::presentation::state::AppState;

use super::errors::{bad_request, error_response, rejected_request};

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub speed: Option<Value>,
    #[serde(default)]
    pub volume: Option<Value>,
}

#[derive(Serialize)]
pub struct TtsResponse {
    pub success: bool,
    pub audio_data: String,
    pub text_length: usize,
    pub message: &'static str,
    pub format: &'static str,
    pub api_status: &'static str,
}

#[derive(Serialize)]
pub struct MissingTextResponse {
    pub success: bool,
    pub error: &'static str,
    pub required_fields: [&'static str; 1],
    pub optional_fields: [&'static str; 2],
}

/// Accepts JSON numbers or numeric strings.
fn loose_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn missing_text() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MissingTextResponse {
            success: false,
            error: "No text provided",
            required_fields: ["text"],
            optional_fields: ["speed", "volume"],
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, body))]
pub async fn tts_handler(
    State(state): State<AppState>,
    body: Result<Json<TtsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected text-to-speech body");
            return rejected_request(rejection.status(), rejection.body_text());
        }
    };

    let Some(text) = request.text else {
        return missing_text();
    };

    let settings = VoiceSettings::from_request(
        loose_number(request.speed.as_ref()),
        loose_number(request.volume.as_ref()),
    );
    tracing::debug!(text = %preview_for_log(&text), "Text-to-speech request");

    match state.speech_service.synthesize(&text, settings).await {
        Ok(speech) => (
            StatusCode::OK,
            Json(TtsResponse {
                success: true,
                audio_data: STANDARD.encode(&speech.wav),
                text_length: speech.text_length,
                message: "Text converted to speech successfully",
                format: "base64_wav",
                api_status: "success",
            }),
        )
            .into_response(),
        Err(SpeechError::EmptyText) => bad_request(SpeechError::EmptyText.to_string()),
        Err(SpeechError::Synthesis(e)) => {
            tracing::error!(error = %e, "Text-to-speech conversion failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Text-to-speech conversion failed: {e}"),
            )
        }
    }
}
