use super::audio_payload::AudioConversion;
use super::language::LanguageCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    /// Recognizer score in `[0.0, 1.0]`, when the engine reports one.
    pub confidence: Option<f32>,
}

impl Transcript {
    pub fn new(text: String) -> Self {
        Self {
            text,
            confidence: None,
        }
    }

    pub fn with_confidence(text: String, confidence: f32) -> Self {
        Self {
            text,
            confidence: Some(confidence),
        }
    }

    pub fn confidence_label(&self) -> Option<&'static str> {
        self.confidence.map(|c| match c {
            c if c >= 0.8 => "high",
            c if c >= 0.5 => "medium",
            _ => "low",
        })
    }
}

/// Result of routing one transcription request.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionOutcome {
    Recognized {
        transcript: Transcript,
        language: LanguageCode,
        conversion: AudioConversion,
    },
    /// The recognizer could not produce text; the caller should retry client-side.
    Fallback {
        language: LanguageCode,
        conversion: AudioConversion,
    },
}
