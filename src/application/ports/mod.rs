mod audio_transcoder;
mod file_loader;
mod speech_synthesizer;
mod transcription_engine;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
