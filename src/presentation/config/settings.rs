use std::path::Path;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{AnalysisRules, TopicRule, default_topic_rules};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub transcription: TranscriptionSettings,
    pub synthesis: SynthesisSettings,
    pub analysis: AnalysisSettings,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.{environment}.toml` and
    /// `APP_*` variables, e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment)
    }

    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let base = dir.join("appsettings");
        let layered = dir.join(format!("appsettings.{}", environment.as_str()));

        Config::builder()
            .add_source(File::with_name(&base.to_string_lossy()).required(false))
            .add_source(File::with_name(&layered.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Request body ceiling in mebibytes.
    pub max_body_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_body_mb: 25,
        }
    }
}

impl ServerSettings {
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[default]
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Container assumed for inline audio.
    pub source_format: String,
    pub timeout_secs: u64,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: TranscriptionProvider::default(),
            api_key: None,
            base_url: None,
            model: None,
            source_format: "webm".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisProvider {
    #[default]
    Espeak,
    #[serde(rename = "openai")]
    OpenAi,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    pub provider: SynthesisProvider,
    pub binary: String,
    pub voice: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            provider: SynthesisProvider::default(),
            binary: "espeak-ng".to_string(),
            voice: None,
            api_key: None,
            base_url: None,
            model: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub top_keywords: usize,
    pub summary_keywords: usize,
    pub summary_sentences: usize,
    pub topics: Vec<TopicRule>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_keywords: 10,
            summary_keywords: 5,
            summary_sentences: 3,
            topics: default_topic_rules(),
        }
    }
}

impl From<&AnalysisSettings> for AnalysisRules {
    fn from(settings: &AnalysisSettings) -> Self {
        Self {
            top_keywords: settings.top_keywords,
            summary_keywords: settings.summary_keywords,
            summary_sentences: settings.summary_sentences,
            topics: settings.topics.clone(),
        }
    }
}
