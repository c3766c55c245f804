use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{TranscribeError, TranscriptionRequest};
use crate::domain::{
    AudioCandidates, AudioPayload, AudioPayloadError, TranscriptionOutcome, UploadedFile,
};
use crate::presentation::state::AppState;

use super::errors::{ErrorResponse, invalid_request, rejected_request, unexpected_error};

const FALLBACK_ERROR: &str = "Backend processing failed. Using browser-based recognition.";
const FALLBACK_NOTE: &str = "The frontend will automatically use browser-based speech recognition.";
const SUPPORTED_FORMATS: [&str; 2] = ["base64", "file_upload"];

#[derive(Debug, Default, Deserialize)]
struct TranscribeBody {
    audio_data: Option<String>,
    audio: Option<String>,
    /// Any JSON type; non-string tags fall back to the default language.
    language: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub success: bool,
    pub text: String,
    pub language: &'static str,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<&'static str>,
    pub audio_conversion: &'static str,
}

#[derive(Serialize)]
pub struct FallbackResponse {
    pub success: bool,
    pub error: &'static str,
    pub fallback: &'static str,
    pub note: &'static str,
    pub api_status: &'static str,
}

#[derive(Serialize)]
pub struct MissingAudioResponse {
    pub success: bool,
    pub error: String,
    pub supported_formats: [&'static str; 2],
}

struct ParsedRequest {
    candidates: AudioCandidates,
    language: Option<String>,
}

/// Blank strings count as absent fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
}

async fn read_json(request: Request, state: &AppState) -> Result<ParsedRequest, Response> {
    let body = Bytes::from_request(request, state)
        .await
        .map_err(|e| rejected_request(e.status(), e.body_text()))?;

    let parsed: TranscribeBody = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Transcription body is not valid JSON");
        invalid_request(e)
    })?;

    Ok(ParsedRequest {
        candidates: AudioCandidates {
            audio_data: non_blank(parsed.audio_data),
            audio: non_blank(parsed.audio),
            upload: None,
        },
        language: parsed.language.and_then(|value| match value {
            serde_json::Value::String(tag) => Some(tag),
            _ => None,
        }),
    })
}

async fn read_multipart(request: Request, state: &AppState) -> Result<ParsedRequest, Response> {
    let mut multipart = Multipart::from_request(request, state)
        .await
        .map_err(|e| rejected_request(e.status(), e.body_text()))?;

    let mut candidates = AudioCandidates::default();
    let mut language = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected_request(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);

        match (name.as_str(), filename) {
            ("audio", Some(filename)) => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| rejected_request(e.status(), e.body_text()))?;
                candidates.upload.get_or_insert(UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            ("audio_data" | "audio" | "language", _) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| rejected_request(e.status(), e.body_text()))?;
                let slot = match name.as_str() {
                    "audio_data" => &mut candidates.audio_data,
                    "audio" => &mut candidates.audio,
                    _ => &mut language,
                };
                if slot.is_none() {
                    *slot = non_blank(Some(text));
                }
            }
            _ => {}
        }
    }

    Ok(ParsedRequest {
        candidates,
        language,
    })
}

fn payload_error(error: AudioPayloadError) -> Response {
    match error {
        AudioPayloadError::MissingAudio => (
            StatusCode::BAD_REQUEST,
            Json(MissingAudioResponse {
                success: false,
                error: error.to_string(),
                supported_formats: SUPPORTED_FORMATS,
            }),
        )
            .into_response(),
        AudioPayloadError::NoFileSelected => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.to_string())),
        )
            .into_response(),
        AudioPayloadError::InvalidEncoding(detail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("Invalid audio data: {detail}")).with_api_status("error")),
        )
            .into_response(),
    }
}

fn outcome_response(outcome: TranscriptionOutcome) -> Response {
    match outcome {
        TranscriptionOutcome::Recognized {
            transcript,
            language,
            conversion,
        } => (
            StatusCode::OK,
            Json(TranscriptionResponse {
                success: true,
                confidence: transcript.confidence_label(),
                text: transcript.text,
                language: language.as_str(),
                method: "backend",
                audio_conversion: conversion.as_str(),
            }),
        )
            .into_response(),
        TranscriptionOutcome::Fallback { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(FallbackResponse {
                success: false,
                error: FALLBACK_ERROR,
                fallback: "browser",
                note: FALLBACK_NOTE,
                api_status: "fallback_available",
            }),
        )
            .into_response(),
    }
}

/// Accepts JSON or multipart audio and answers with a transcript, or a 503
/// telling the client to recognize locally.
#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler(State(state): State<AppState>, request: Request) -> Response {
    let parsed = if is_multipart(request.headers()) {
        read_multipart(request, &state).await
    } else {
        read_json(request, &state).await
    };

    let parsed = match parsed {
        Ok(p) => p,
        Err(response) => return response,
    };

    let payload = match AudioPayload::resolve(parsed.candidates) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Transcription request without usable audio");
            return payload_error(e);
        }
    };

    let request = TranscriptionRequest {
        payload,
        language: parsed.language,
    };

    match state.transcription_service.transcribe(request).await {
        Ok(outcome) => outcome_response(outcome),
        Err(TranscribeError::Payload(e)) => {
            tracing::warn!(error = %e, "Audio payload could not be decoded");
            payload_error(e)
        }
        Err(e @ TranscribeError::Staging(_)) => {
            tracing::error!(error = %e, "Transcription failed unexpectedly");
            unexpected_error()
        }
    }
}
