pub mod audio_decoder;
mod google_speech_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod unavailable_engine;
mod wav_transcoder;

pub use google_speech_engine::GoogleSpeechEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
pub use unavailable_engine::UnavailableEngine;
pub use wav_transcoder::{TARGET_SAMPLE_RATE, WavTranscoder, encode_wav};
