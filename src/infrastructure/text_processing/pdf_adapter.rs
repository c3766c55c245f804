use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub const EMPTY_PAGE_MARKER: &str = "[No text content found]";
pub const FAILED_PAGE_MARKER: &str = "[Error extracting text]";

#[derive(Default)]
pub struct PdfAdapter;

enum PageText {
    Text(String),
    Blank,
    Failed,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<PageText>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages = (0..page_count)
            .map(|page_index| match doc.extract_text(page_index) {
                Ok(raw) => {
                    let text = sanitize_extracted_text(&raw);
                    if text.is_empty() {
                        PageText::Blank
                    } else {
                        PageText::Text(text)
                    }
                }
                Err(e) => {
                    tracing::warn!(page = page_index + 1, error = %e, "PDF page extraction failed");
                    PageText::Failed
                }
            })
            .collect();

        Ok(pages)
    }
}

/// Joins pages under `--- Page N ---` headers.
fn render_pages(pages: &[PageText]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let body = match page {
                PageText::Text(text) => text.as_str(),
                PageText::Blank => EMPTY_PAGE_MARKER,
                PageText::Failed => FAILED_PAGE_MARKER,
            };
            format!("--- Page {} ---\n{body}", index + 1)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.format.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::Builder::new()
            .prefix("sabda-doc-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
            })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let with_text = pages
            .iter()
            .filter(|p| matches!(p, PageText::Text(_)))
            .count();
        tracing::info!(page_count = pages.len(), with_text, "PDF text extraction complete");

        if with_text == 0 {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(render_pages(&pages))
    }
}
