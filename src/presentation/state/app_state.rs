use std::sync::Arc;

use crate::application::ports::{
    AudioTranscoder, FileLoader, SpeechSynthesizer, TranscriptionEngine,
};
use crate::application::services::{
    DocumentService, SpeechService, TextAnalyzer, TextProcessingService, TranscriptionService,
};
use crate::presentation::config::Settings;

/// Collaborator adapters the services are built from.
pub struct Collaborators {
    pub engine: Arc<dyn TranscriptionEngine>,
    pub transcoder: Arc<dyn AudioTranscoder>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub file_loader: Arc<dyn FileLoader>,
}

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub speech_service: Arc<SpeechService>,
    pub document_service: Arc<DocumentService>,
    pub text_processing_service: Arc<TextProcessingService>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(collaborators: Collaborators, settings: &Settings) -> Self {
        let analyzer = TextAnalyzer::new((&settings.analysis).into());
        let text_processing_service = Arc::new(TextProcessingService::new(analyzer));

        let transcription_service = Arc::new(TranscriptionService::new(
            collaborators.engine,
            collaborators.transcoder,
            settings.transcription.source_format.clone(),
        ));
        let speech_service = Arc::new(SpeechService::new(collaborators.synthesizer));
        let document_service = Arc::new(DocumentService::new(
            collaborators.file_loader,
            Arc::clone(&text_processing_service),
        ));

        Self {
            transcription_service,
            speech_service,
            document_service,
            text_processing_service,
            max_body_bytes: settings.server.max_body_bytes(),
        }
    }
}
