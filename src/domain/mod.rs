mod audio_payload;
mod document;
mod language;
mod process_type;
mod transcript;
mod voice_settings;

pub use audio_payload::{
    AudioCandidates, AudioContainer, AudioConversion, AudioPayload, AudioPayloadError,
    UploadedFile, decode_inline_audio,
};
pub use document::{Document, DocumentFormat, secure_filename};
pub use language::{LanguageCode, SUPPORTED_LANGUAGES, SupportedLanguage};
pub use process_type::ProcessType;
pub use transcript::{Transcript, TranscriptionOutcome};
pub use voice_settings::{DEFAULT_RATE_WPM, DEFAULT_VOLUME, VoiceSettings};
