use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const DATA_URL_PREFIX: &str = "data:audio/";

/// Audio carried by a transcription request, resolved to exactly one shape.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioPayload {
    /// Base64 text in the `audio_data` field.
    InlineAudio { base64: String },
    /// Base64 text in the `audio` field.
    InlineAudioAlt { base64: String },
    /// Multipart file part named `audio`.
    UploadedAudio { bytes: Vec<u8>, filename: String },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AudioPayloadError {
    #[error("No audio data provided")]
    MissingAudio,
    #[error("No file selected")]
    NoFileSelected,
    #[error("invalid audio encoding: {0}")]
    InvalidEncoding(String),
}

/// Every audio-bearing field found on a request, before precedence is applied.
#[derive(Debug, Default)]
pub struct AudioCandidates {
    pub audio_data: Option<String>,
    pub audio: Option<String>,
    pub upload: Option<UploadedFile>,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl AudioPayload {
    /// Picks one shape with the precedence `audio_data` > `audio` > upload.
    pub fn resolve(candidates: AudioCandidates) -> Result<Self, AudioPayloadError> {
        if let Some(base64) = candidates.audio_data {
            return Ok(Self::InlineAudio { base64 });
        }
        if let Some(base64) = candidates.audio {
            return Ok(Self::InlineAudioAlt { base64 });
        }
        match candidates.upload {
            Some(file) if file.filename.trim().is_empty() => Err(AudioPayloadError::NoFileSelected),
            Some(file) => Ok(Self::UploadedAudio {
                bytes: file.bytes,
                filename: file.filename,
            }),
            None => Err(AudioPayloadError::MissingAudio),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Self::InlineAudio { .. } => "audio_data",
            Self::InlineAudioAlt { .. } => "audio",
            Self::UploadedAudio { .. } => "upload",
        }
    }

    /// File extension of an uploaded file, lowercased.
    pub fn upload_extension(&self) -> Option<String> {
        match self {
            Self::UploadedAudio { filename, .. } => std::path::Path::new(filename)
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, AudioPayloadError> {
        let bytes = match self {
            Self::InlineAudio { base64 } | Self::InlineAudioAlt { base64 } => {
                decode_inline_audio(&base64)?
            }
            Self::UploadedAudio { bytes, .. } => bytes,
        };

        if bytes.is_empty() {
            return Err(AudioPayloadError::InvalidEncoding(
                "audio payload is empty".to_string(),
            ));
        }

        Ok(bytes)
    }
}

/// Decodes base64 audio, accepting an optional `data:audio/...;base64,` prefix.
pub fn decode_inline_audio(raw: &str) -> Result<Vec<u8>, AudioPayloadError> {
    let trimmed = raw.trim();
    let encoded = if trimmed.starts_with(DATA_URL_PREFIX) {
        trimmed
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| {
                AudioPayloadError::InvalidEncoding("data URL has no payload".to_string())
            })?
    } else {
        trimmed
    };

    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AudioPayloadError::InvalidEncoding(e.to_string()))
}

/// Container family detected from leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioContainer {
    Wav,
    WebM,
    Ogg,
    Flac,
    Unknown,
}

impl AudioContainer {
    pub fn sniff(data: &[u8]) -> Self {
        match data {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Self::Wav,
            [0x1A, 0x45, 0xDF, 0xA3, ..] => Self::WebM,
            [b'O', b'g', b'g', b'S', ..] => Self::Ogg,
            [b'f', b'L', b'a', b'C', ..] => Self::Flac,
            _ => Self::Unknown,
        }
    }
}

/// Which path the best-effort transcode took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioConversion {
    Transcoded,
    Passthrough,
}

impl AudioConversion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transcoded => "transcoded",
            Self::Passthrough => "passthrough",
        }
    }
}

impl std::fmt::Display for AudioConversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
