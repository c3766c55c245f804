mod documents;
mod errors;
mod health;
mod languages;
mod process_text;
mod transcribe;
mod tts;

pub use documents::upload_document_handler;
pub use errors::{ErrorResponse, UNEXPECTED_ERROR_MESSAGE, not_found_handler, panic_response};
pub use health::health_handler;
pub use languages::languages_handler;
pub use process_text::process_text_handler;
pub use transcribe::transcribe_handler;
pub use tts::tts_handler;
