mod document_service;
mod speech_service;
mod stopwords;
mod text_analyzer;
mod text_processing_service;
mod transcription_service;

pub use document_service::{DocumentError, DocumentService, ProcessedDocument};
pub use speech_service::{SpeechError, SpeechService, SynthesizedSpeech};
pub use stopwords::is_stopword;
pub use text_analyzer::{
    AnalysisRules, Complexity, KeywordCount, TextAnalysis, TextAnalyzer, TopicRule,
    default_topic_rules,
};
pub use text_processing_service::{ProcessedText, TextProcessingService};
pub use transcription_service::{TranscribeError, TranscriptionRequest, TranscriptionService};
