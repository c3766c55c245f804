use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use sabda::application::ports::{SpeechSynthesizer, TranscriptionEngine};
use sabda::infrastructure::audio::{TranscriptionEngineFactory, UnavailableEngine, WavTranscoder};
use sabda::infrastructure::observability::{TracingConfig, init_tracing};
use sabda::infrastructure::speech::{EspeakSynthesizer, SynthesizerFactory};
use sabda::infrastructure::text_processing::CompositeFileLoader;
use sabda::presentation::config::Settings;
use sabda::presentation::{AppState, Collaborators, Environment, create_router};

fn build_engine(settings: &Settings) -> Arc<dyn TranscriptionEngine> {
    match TranscriptionEngineFactory::create(&settings.transcription) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::warn!(error = %e, "Recognizer misconfigured, every request will use browser fallback");
            Arc::new(UnavailableEngine::new(e.to_string()))
        }
    }
}

fn build_synthesizer(settings: &Settings) -> Arc<dyn SpeechSynthesizer> {
    match SynthesizerFactory::create(&settings.synthesis) {
        Ok(synthesizer) => synthesizer,
        Err(e) => {
            tracing::warn!(error = %e, "Synthesizer misconfigured, falling back to espeak-ng");
            Arc::new(EspeakSynthesizer::new(
                settings.synthesis.binary.clone(),
                settings.synthesis.voice.clone(),
                std::time::Duration::from_secs(settings.synthesis.timeout_secs),
            ))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let collaborators = Collaborators {
        engine: build_engine(&settings),
        transcoder: Arc::new(WavTranscoder::new(
            settings.transcription.source_format.clone(),
        )),
        synthesizer: build_synthesizer(&settings),
        file_loader: Arc::new(CompositeFileLoader::with_default_adapters()),
    };

    let state = AppState::new(collaborators, &settings);
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;
    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
