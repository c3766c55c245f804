use std::sync::Arc;

use sabda::application::services::{SpeechError, SpeechService};
use sabda::domain::VoiceSettings;

use crate::support::{BrokenSynthesizer, FakeSynthesizer};

#[tokio::test]
async fn given_text_when_synthesizing_then_counts_unicode_chars() {
    let synthesizer = Arc::new(FakeSynthesizer::new());
    let service = SpeechService::new(synthesizer.clone());

    let speech = service
        .synthesize("नमस्ते", VoiceSettings::default())
        .await
        .unwrap();

    assert_eq!(speech.text_length, "नमस्ते".chars().count());
    assert!(!speech.wav.is_empty());
    assert_eq!(synthesizer.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_whitespace_when_synthesizing_then_rejects_without_calling_engine() {
    let synthesizer = Arc::new(FakeSynthesizer::new());
    let service = SpeechService::new(synthesizer.clone());

    let result = service.synthesize(" \t\n", VoiceSettings::default()).await;

    assert!(matches!(result, Err(SpeechError::EmptyText)));
    assert!(synthesizer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_failing_engine_when_synthesizing_then_surfaces_detail() {
    let service = SpeechService::new(Arc::new(BrokenSynthesizer));

    let Err(error) = service.synthesize("hello", VoiceSettings::default()).await else {
        panic!("expected synthesis failure");
    };

    assert!(error.to_string().contains("voice not installed"));
}
