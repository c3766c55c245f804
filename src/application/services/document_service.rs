use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat, ProcessType, secure_filename};

use super::text_processing_service::{ProcessedText, TextProcessingService};

pub struct ProcessedDocument {
    pub document: Document,
    pub extracted_text: String,
    pub processed: ProcessedText,
}

pub struct DocumentService {
    file_loader: Arc<dyn FileLoader>,
    text_processing: Arc<TextProcessingService>,
}

impl DocumentService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        text_processing: Arc<TextProcessingService>,
    ) -> Self {
        Self {
            file_loader,
            text_processing,
        }
    }

    #[tracing::instrument(skip(self, data, process_type), fields(bytes = data.len()))]
    pub async fn process(
        &self,
        filename: &str,
        data: &[u8],
        process_type: &ProcessType,
    ) -> Result<ProcessedDocument, DocumentError> {
        let filename = secure_filename(filename);
        let format = DocumentFormat::from_filename(&filename)
            .ok_or_else(|| DocumentError::UnsupportedType(filename.clone()))?;

        tracing::info!(
            filename = %filename,
            format = format.as_mime(),
            process_type = process_type.as_str(),
            "Processing document"
        );

        let document = Document::new(filename, format, data.len() as u64);

        let extracted_text = match self.file_loader.extract_text(data, &document).await {
            Ok(text) => text,
            Err(FileLoaderError::NoTextFound(_)) => return Err(DocumentError::NoText),
            Err(e) => {
                tracing::error!(error = %e, filename = %document.filename, "Text extraction failed");
                return Err(DocumentError::Extraction(e));
            }
        };

        if extracted_text.trim().is_empty() {
            return Err(DocumentError::NoText);
        }

        let processed = self.text_processing.process(&extracted_text, process_type);

        tracing::info!(
            words = processed.word_count,
            chars = processed.char_count,
            "Document processed"
        );

        Ok(ProcessedDocument {
            document,
            extracted_text,
            processed,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
    #[error(transparent)]
    Extraction(FileLoaderError),
    #[error("No text could be extracted from the document")]
    NoText,
}
