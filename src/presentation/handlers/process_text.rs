use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::TextAnalysis;
use crate::domain::ProcessType;
use crate::infrastructure::observability::preview_for_log;
use crate::presentation::state::AppState;

use super::errors::{bad_request, rejected_request};

#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub process_type: Option<String>,
}

#[derive(Serialize)]
pub struct ProcessTextResponse {
    pub success: bool,
    pub processed_content: String,
    pub process_type: String,
    pub word_count: usize,
    pub char_count: usize,
    pub ai_analysis: TextAnalysis,
    pub message: &'static str,
}

#[tracing::instrument(skip(state, body))]
pub async fn process_text_handler(
    State(state): State<AppState>,
    body: Result<Json<ProcessTextRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected process-text body");
            return rejected_request(rejection.status(), rejection.body_text());
        }
    };

    let Some(text) = request.text else {
        return bad_request("No text provided");
    };
    let text = text.trim();
    if text.is_empty() {
        return bad_request("Text is empty");
    }

    let process_type = ProcessType::parse(request.process_type.as_deref());
    tracing::info!(
        chars = text.chars().count(),
        process_type = process_type.as_str(),
        text = %preview_for_log(text),
        "Processing text"
    );

    let processed = state.text_processing_service.process(text, &process_type);

    (
        StatusCode::OK,
        Json(ProcessTextResponse {
            success: true,
            processed_content: processed.processed_content,
            process_type: process_type.as_str().to_string(),
            word_count: processed.word_count,
            char_count: processed.char_count,
            ai_analysis: processed.analysis,
            message: "Text processed successfully",
        }),
    )
        .into_response()
}
