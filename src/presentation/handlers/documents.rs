use axum::Json;
use axum::extract::{Multipart, State};
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{DocumentError, TextAnalysis};
use crate::domain::ProcessType;
use crate::presentation::state::AppState;

use super::errors::{bad_request, rejected_request};

const UNSUPPORTED_TYPE: &str = "Unsupported file type. Please upload PDF, Word, or text files.";

#[derive(Serialize)]
pub struct UploadDocumentResponse {
    pub success: bool,
    pub filename: String,
    pub extracted_text: String,
    pub processed_content: String,
    pub process_type: String,
    pub word_count: usize,
    pub char_count: usize,
    pub ai_analysis: TextAnalysis,
    pub message: &'static str,
}

struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    process_type: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, Response> {
    let mut form = UploadForm {
        file: None,
        process_type: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected_request(e.status(), e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") if form.file.is_none() => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| rejected_request(e.status(), e.body_text()))?;
                form.file = Some((filename, data.to_vec()));
            }
            Some("type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| rejected_request(e.status(), e.body_text()))?;
                form.process_type = Some(value);
            }
            _ => {}
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload without a multipart body");
            return bad_request("No file provided");
        }
    };

    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some((filename, data)) = form.file else {
        tracing::warn!("Upload request with no file");
        return bad_request("No file provided");
    };
    if filename.trim().is_empty() {
        return bad_request("No file selected");
    }

    let process_type = ProcessType::parse(form.process_type.as_deref());

    match state
        .document_service
        .process(&filename, &data, &process_type)
        .await
    {
        Ok(document) => (
            StatusCode::OK,
            Json(UploadDocumentResponse {
                success: true,
                filename: document.document.filename,
                extracted_text: document.extracted_text,
                processed_content: document.processed.processed_content,
                process_type: process_type.as_str().to_string(),
                word_count: document.processed.word_count,
                char_count: document.processed.char_count,
                ai_analysis: document.processed.analysis,
                message: "Document processed successfully",
            }),
        )
            .into_response(),
        Err(DocumentError::UnsupportedType(name)) => {
            tracing::warn!(filename = %name, "Unsupported document type");
            bad_request(UNSUPPORTED_TYPE)
        }
        Err(DocumentError::Extraction(e)) => bad_request(format!("Failed to extract text: {e}")),
        Err(e @ DocumentError::NoText) => bad_request(e.to_string()),
    }
}
