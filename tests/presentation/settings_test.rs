use sabda::presentation::config::{
    Environment, Settings, SynthesisProvider, TranscriptionProvider,
};

#[test]
fn given_no_files_when_loading_then_defaults_apply() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_body_bytes(), 25 * 1024 * 1024);
    assert_eq!(settings.transcription.provider, TranscriptionProvider::Google);
    assert_eq!(settings.transcription.source_format, "webm");
    assert_eq!(settings.synthesis.provider, SynthesisProvider::Espeak);
    assert_eq!(settings.analysis.summary_sentences, 3);
    assert!(!settings.analysis.topics.is_empty());
}

#[test]
fn given_environment_overlay_when_loading_then_overrides_base_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("appsettings.toml"),
        r#"
[server]
port = 7000
max_body_mb = 4

[transcription]
provider = "disabled"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("appsettings.test.toml"),
        r#"
[server]
port = 7100

[synthesis]
provider = "openai"
voice = "nova"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Test).unwrap();

    assert_eq!(settings.server.port, 7100);
    assert_eq!(settings.server.max_body_mb, 4);
    assert_eq!(settings.transcription.provider, TranscriptionProvider::Disabled);
    assert_eq!(settings.synthesis.provider, SynthesisProvider::OpenAi);
    assert_eq!(settings.synthesis.voice.as_deref(), Some("nova"));
}

#[test]
fn given_custom_topics_when_loading_then_replaces_default_rules() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("appsettings.toml"),
        r#"
[analysis]
top_keywords = 3

[[analysis.topics]]
topic = "Music"
keywords = ["raga", "tala"]
"#,
    )
    .unwrap();

    let settings = Settings::load_from(dir.path(), Environment::Local).unwrap();

    assert_eq!(settings.analysis.top_keywords, 3);
    assert_eq!(settings.analysis.topics.len(), 1);
    assert_eq!(settings.analysis.topics[0].topic, "Music");
}

#[test]
fn given_repository_appsettings_when_loading_then_parses() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

    let settings = Settings::load_from(root, Environment::Prod).unwrap();

    assert!(settings.logging.json);
}
