use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub features: [&'static str; 4],
    pub version: &'static str,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            message: "Speech and document API is running",
            features: [
                "speech-to-text",
                "text-to-speech",
                "document-processing",
                "text-analysis",
            ],
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
