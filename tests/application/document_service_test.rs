use std::sync::Arc;

use sabda::application::services::{DocumentError, DocumentService, TextProcessingService};
use sabda::domain::{DocumentFormat, ProcessType};
use sabda::infrastructure::text_processing::CompositeFileLoader;

fn service() -> DocumentService {
    DocumentService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::new(TextProcessingService::default()),
    )
}

#[tokio::test]
async fn given_text_file_when_processing_then_filename_is_sanitized() {
    let processed = service()
        .process("../My Notes.txt", b"Plain words here.", &ProcessType::Summary)
        .await
        .unwrap();

    assert_eq!(processed.document.filename, "My_Notes.txt");
    assert_eq!(processed.document.format, DocumentFormat::Text);
    assert_eq!(processed.extracted_text, "Plain words here.");
    assert_eq!(processed.processed.word_count, 3);
}

#[tokio::test]
async fn given_unknown_extension_when_processing_then_unsupported_type() {
    let result = service()
        .process("archive.tar.gz", b"data", &ProcessType::Summary)
        .await;

    assert!(matches!(result, Err(DocumentError::UnsupportedType(_))));
}

#[tokio::test]
async fn given_invalid_utf8_text_when_processing_then_extraction_error() {
    let result = service()
        .process("broken.txt", &[0xff, 0xfe, 0x00], &ProcessType::Summary)
        .await;

    assert!(matches!(result, Err(DocumentError::Extraction(_))));
}

#[tokio::test]
async fn given_blank_text_when_processing_then_no_text() {
    let result = service()
        .process("blank.txt", b"\n\n   ", &ProcessType::Analysis)
        .await;

    assert!(matches!(result, Err(DocumentError::NoText)));
}
