use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::VoiceSettings;

/// Local synthesis through the `espeak-ng` command-line engine.
pub struct EspeakSynthesizer {
    binary: String,
    voice: Option<String>,
    timeout: Duration,
}

impl EspeakSynthesizer {
    pub fn new(binary: impl Into<String>, voice: Option<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            voice,
            timeout,
        }
    }

    fn command(&self, settings: VoiceSettings, output: &std::path::Path) -> Command {
        let amplitude = (settings.volume() * 100.0).round() as u32;

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-s")
            .arg(settings.rate_wpm().to_string())
            .arg("-a")
            .arg(amplitude.to_string());
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg("-w")
            .arg(output)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    async fn run(&self, text: &str, settings: VoiceSettings) -> Result<Vec<u8>, SynthesisError> {
        let output = tempfile::Builder::new()
            .prefix("sabda-tts-")
            .suffix(".wav")
            .tempfile()?;

        let mut child = self.command(settings, output.path()).spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SynthesisError::Unavailable(format!("{} not found on PATH", self.binary))
            } else {
                SynthesisError::Io(e)
            }
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let finished = child.wait_with_output().await?;
        if !finished.status.success() {
            let stderr = String::from_utf8_lossy(&finished.stderr);
            return Err(SynthesisError::SynthesisFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                finished.status,
                stderr.trim()
            )));
        }

        let wav = tokio::fs::read(output.path()).await?;
        Ok(wav)
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count(), rate = settings.rate_wpm()))]
    async fn synthesize(
        &self,
        text: &str,
        settings: VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError> {
        let wav = tokio::time::timeout(self.timeout, self.run(text, settings))
            .await
            .map_err(|_| SynthesisError::TimedOut(self.timeout.as_secs()))??;

        tracing::debug!(bytes = wav.len(), "espeak synthesis completed");
        Ok(wav)
    }
}
