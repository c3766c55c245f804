use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

const DOCUMENT_PART: &str = "word/document.xml";
const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

/// Reads the main body part of a WordprocessingML package.
///
/// Body paragraphs are emitted one per line. Table rows become
/// `cell | cell | ` lines, with the paragraphs of a cell joined by spaces.
/// Empty paragraphs and empty cells are skipped.
pub struct DocxAdapter {
    max_xml_bytes: u64,
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self::with_max_xml_bytes(MAX_DOCUMENT_XML_BYTES)
    }

    /// Caps the decompressed size of `word/document.xml`.
    pub fn with_max_xml_bytes(max_xml_bytes: u64) -> Self {
        Self { max_xml_bytes }
    }

    fn read_document_xml(data: &[u8], max_xml_bytes: u64) -> Result<Vec<u8>, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a DOCX package: {e}")))?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        // The declared size is uploader-controlled, so it never sizes the buffer.
        let mut xml = Vec::new();
        part.by_ref()
            .take(max_xml_bytes.saturating_add(1))
            .read_to_end(&mut xml)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("read {DOCUMENT_PART}: {e}")))?;

        if xml.len() as u64 > max_xml_bytes {
            return Err(FileLoaderError::ExtractionFailed(format!(
                "{DOCUMENT_PART} exceeds {max_xml_bytes} bytes"
            )));
        }
        Ok(xml)
    }

    fn extract(data: &[u8], max_xml_bytes: u64) -> Result<String, FileLoaderError> {
        let xml = Self::read_document_xml(data, max_xml_bytes)?;
        body_text(&xml)
    }
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct BodyWriter {
    out: String,
    paragraph: String,
    cell: Vec<String>,
    table_depth: usize,
    in_text_run: bool,
}

impl BodyWriter {
    fn end_paragraph(&mut self) {
        let paragraph = std::mem::take(&mut self.paragraph);
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.table_depth > 0 {
            self.cell.push(trimmed.to_string());
        } else {
            self.out.push_str(trimmed);
            self.out.push('\n');
        }
    }

    fn end_cell(&mut self) {
        let cell = std::mem::take(&mut self.cell).join(" ");
        if !cell.is_empty() {
            self.out.push_str(&cell);
            self.out.push_str(" | ");
        }
    }

    fn end_row(&mut self) {
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out.trim().to_string()
    }
}

/// Flattens `word/document.xml` into plain text in document order.
pub fn body_text(xml: &[u8]) -> Result<String, FileLoaderError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut writer = BodyWriter::default();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("malformed document XML: {e}")))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => writer.table_depth += 1,
                b"t" => writer.in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => writer.in_text_run = false,
                b"p" => writer.end_paragraph(),
                b"tc" => writer.end_cell(),
                b"tr" => writer.end_row(),
                b"tbl" => writer.table_depth = writer.table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => writer.paragraph.push('\t'),
                b"br" | b"cr" => writer.paragraph.push(' '),
                _ => {}
            },
            Event::Text(t) if writer.in_text_run => {
                let text = t.unescape().map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("bad text node: {e}"))
                })?;
                writer.paragraph.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(writer.finish())
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.format.as_mime().to_string(),
            ));
        }

        let owned = data.to_vec();
        let max_xml_bytes = self.max_xml_bytes;
        let text = tokio::task::spawn_blocking(move || Self::extract(&owned, max_xml_bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.chars().count(), "DOCX text extraction complete");

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
