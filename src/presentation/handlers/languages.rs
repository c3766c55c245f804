use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::{SUPPORTED_LANGUAGES, SupportedLanguage};

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: &'static [SupportedLanguage],
    pub total: usize,
    pub api_status: &'static str,
}

pub async fn languages_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LanguagesResponse {
            success: true,
            languages: &SUPPORTED_LANGUAGES,
            total: SUPPORTED_LANGUAGES.len(),
            api_status: "success",
        }),
    )
}
