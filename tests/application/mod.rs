mod document_service_test;
mod speech_service_test;
mod text_analyzer_test;
mod text_processing_service_test;
