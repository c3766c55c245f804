use std::path::Path;

use sabda::application::ports::TranscriptionError;
use sabda::domain::LanguageCode;
use sabda::infrastructure::audio::TranscriptionEngineFactory;
use sabda::presentation::config::{TranscriptionProvider, TranscriptionSettings};

fn settings(provider: TranscriptionProvider, api_key: Option<&str>) -> TranscriptionSettings {
    TranscriptionSettings {
        provider,
        api_key: api_key.map(str::to_string),
        ..TranscriptionSettings::default()
    }
}

#[tokio::test]
async fn given_disabled_provider_when_transcribing_then_engine_is_unavailable() {
    let engine =
        TranscriptionEngineFactory::create(&settings(TranscriptionProvider::Disabled, None))
            .unwrap();

    let result = engine
        .transcribe(Path::new("/nonexistent.wav"), LanguageCode::DEFAULT)
        .await;

    assert!(matches!(result, Err(TranscriptionError::Unavailable(_))));
}

#[test]
fn given_google_without_key_when_creating_then_errors() {
    let result = TranscriptionEngineFactory::create(&settings(TranscriptionProvider::Google, None));

    assert!(matches!(result, Err(TranscriptionError::Unavailable(_))));
}

#[test]
fn given_openai_with_blank_key_when_creating_then_errors() {
    let result =
        TranscriptionEngineFactory::create(&settings(TranscriptionProvider::OpenAi, Some("  ")));

    assert!(result.is_err());
}

#[test]
fn given_keyed_providers_when_creating_then_succeeds() {
    assert!(
        TranscriptionEngineFactory::create(&settings(TranscriptionProvider::Google, Some("k")))
            .is_ok()
    );
    assert!(
        TranscriptionEngineFactory::create(&settings(TranscriptionProvider::OpenAi, Some("k")))
            .is_ok()
    );
}
