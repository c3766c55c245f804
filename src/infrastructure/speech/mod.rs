mod espeak_synthesizer;
mod openai_speech_synthesizer;
mod synthesizer_factory;

pub use espeak_synthesizer::EspeakSynthesizer;
pub use openai_speech_synthesizer::{OpenAiSpeechSynthesizer, speed_multiplier};
pub use synthesizer_factory::SynthesizerFactory;
