use std::any::Any;

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// `{success: false, error}` envelope shared by every failing route.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_status: Option<&'static str>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            api_status: None,
        }
    }

    pub fn with_api_status(mut self, api_status: &'static str) -> Self {
        self.api_status = Some(api_status);
        self
    }
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(error))).into_response()
}

pub fn bad_request(error: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, error)
}

pub fn invalid_request(detail: impl std::fmt::Display) -> Response {
    rejected_request(StatusCode::BAD_REQUEST, detail)
}

/// Keeps the extractor's status so an oversized body stays a 413.
pub fn rejected_request(status: StatusCode, detail: impl std::fmt::Display) -> Response {
    error_response(status, format!("Invalid request body: {detail}"))
}

pub fn unexpected_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(UNEXPECTED_ERROR_MESSAGE).with_api_status("error")),
    )
        .into_response()
}

/// Converts a handler panic into the generic 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(detail, "Handler panicked");
    unexpected_error()
}

pub async fn not_found_handler(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    error_response(
        StatusCode::NOT_FOUND,
        format!("Endpoint not found: {}", uri.path()),
    )
}
