use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sabda::application::ports::{
    AudioTranscoder, SpeechSynthesizer, SynthesisError, TranscodeError, TranscriptionEngine,
    TranscriptionError,
};
use sabda::domain::{LanguageCode, Transcript, VoiceSettings};
use sabda::infrastructure::audio::encode_wav;
use sabda::infrastructure::text_processing::CompositeFileLoader;
use sabda::presentation::config::Settings;
use sabda::presentation::{AppState, Collaborators, create_router};

/// What a recognizer saw on one call.
#[derive(Debug, Clone)]
pub struct HeardAudio {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub language: LanguageCode,
}

/// Answers with a transcript derived from the staged file's contents.
#[derive(Default)]
pub struct EchoEngine {
    pub confidence: Option<f32>,
    pub heard: Mutex<Vec<HeardAudio>>,
}

impl EchoEngine {
    pub fn with_confidence(confidence: f32) -> Self {
        Self {
            confidence: Some(confidence),
            heard: Mutex::default(),
        }
    }

    pub fn last_heard(&self) -> Option<HeardAudio> {
        self.heard.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TranscriptionEngine for EchoEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        let bytes = std::fs::read(audio_path)
            .map_err(|e| TranscriptionError::AudioUnreadable(e.to_string()))?;
        let checksum: u64 = bytes.iter().map(|&b| u64::from(b)).sum();
        let text = format!("heard {} bytes ({checksum})", bytes.len());

        self.heard.lock().unwrap().push(HeardAudio {
            path: audio_path.to_path_buf(),
            bytes,
            language,
        });

        Ok(match self.confidence {
            Some(c) => Transcript::with_confidence(text, c),
            None => Transcript::new(text),
        })
    }
}

/// Always fails, like an unreachable recognizer.
pub struct FailingEngine;

#[async_trait]
impl TranscriptionEngine for FailingEngine {
    async fn transcribe(
        &self,
        _audio_path: &Path,
        _language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::ApiRequestFailed(
            "connection refused by upstream-secret-host".to_string(),
        ))
    }
}

/// Returns whitespace, which counts as "no speech".
pub struct SilentEngine;

#[async_trait]
impl TranscriptionEngine for SilentEngine {
    async fn transcribe(
        &self,
        _audio_path: &Path,
        _language: LanguageCode,
    ) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript::new("   ".to_string()))
    }
}

/// Forces the passthrough path.
pub struct RejectingTranscoder;

impl AudioTranscoder for RejectingTranscoder {
    fn to_wav(&self, _data: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        Err(TranscodeError::DecodingFailed("unsupported container".to_string()))
    }
}

/// Pretends every input converts to the same short WAV.
pub struct FixedWavTranscoder;

impl AudioTranscoder for FixedWavTranscoder {
    fn to_wav(&self, _data: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        encode_wav(&[0.0; 160], 16_000)
    }
}

pub struct FakeSynthesizer {
    pub calls: Mutex<Vec<(String, VoiceSettings)>>,
}

impl FakeSynthesizer {
    pub fn new() -> Self {
        Self {
            calls: Mutex::default(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), settings));
        encode_wav(&[0.0; 160], 16_000).map_err(|e| SynthesisError::SynthesisFailed(e.to_string()))
    }
}

pub struct BrokenSynthesizer;

#[async_trait]
impl SpeechSynthesizer for BrokenSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        _settings: VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError> {
        Err(SynthesisError::SynthesisFailed("voice not installed".to_string()))
    }
}

pub struct TestApp {
    pub engine: Arc<dyn TranscriptionEngine>,
    pub transcoder: Arc<dyn AudioTranscoder>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    pub settings: Settings,
}

impl TestApp {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self {
            engine,
            transcoder: Arc::new(RejectingTranscoder),
            synthesizer: Arc::new(FakeSynthesizer::new()),
            settings: Settings::default(),
        }
    }

    pub fn max_body_mb(mut self, max_body_mb: usize) -> Self {
        self.settings.server.max_body_mb = max_body_mb;
        self
    }

    pub fn transcoder(mut self, transcoder: Arc<dyn AudioTranscoder>) -> Self {
        self.transcoder = transcoder;
        self
    }

    pub fn synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn router(self) -> axum::Router {
        let collaborators = Collaborators {
            engine: self.engine,
            transcoder: self.transcoder,
            synthesizer: self.synthesizer,
            file_loader: Arc::new(CompositeFileLoader::with_default_adapters()),
        };
        create_router(AppState::new(collaborators, &self.settings))
    }
}

pub const BOUNDARY: &str = "sabda-test-boundary";

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
