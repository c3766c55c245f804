mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AnalysisSettings, LoggingSettings, ServerSettings, Settings, SynthesisProvider,
    SynthesisSettings, TranscriptionProvider, TranscriptionSettings,
};
