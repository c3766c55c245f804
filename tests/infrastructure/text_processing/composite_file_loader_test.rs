use std::sync::Arc;

use sabda::application::ports::{FileLoader, FileLoaderError};
use sabda::domain::{Document, DocumentFormat};
use sabda::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[tokio::test]
async fn given_text_with_bom_when_loading_then_strips_it() {
    let loader = CompositeFileLoader::with_default_adapters();
    let document = Document::new("notes.txt".to_string(), DocumentFormat::Text, 8);

    let text = loader
        .extract_text("\u{feff}hello".as_bytes(), &document)
        .await
        .unwrap();

    assert_eq!(text, "hello");
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_unsupported() {
    let loader = CompositeFileLoader::new(vec![(
        DocumentFormat::Text,
        Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
    )]);
    let document = Document::new("scan.pdf".to_string(), DocumentFormat::Pdf, 4);

    let result = loader.extract_text(b"%PDF", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(mime)) if mime == "application/pdf"
    ));
}

#[tokio::test]
async fn given_corrupt_pdf_when_loading_then_extraction_fails() {
    let loader = CompositeFileLoader::with_default_adapters();
    let document = Document::new("broken.pdf".to_string(), DocumentFormat::Pdf, 9);

    let result = loader.extract_text(b"not a pdf", &document).await;

    assert!(result.is_err());
}
