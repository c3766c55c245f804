use std::io::Cursor;

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::application::ports::{AudioTranscoder, TranscodeError};

use super::audio_decoder::decode_to_mono;

pub const TARGET_SAMPLE_RATE: u32 = 16_000;
const RESAMPLE_CHUNK: usize = 1024;

/// Transcodes to 16 kHz mono 16-bit WAV, assuming a fixed source container.
pub struct WavTranscoder {
    source_format: String,
}

impl WavTranscoder {
    pub fn new(source_format: impl Into<String>) -> Self {
        Self {
            source_format: source_format.into(),
        }
    }
}

impl Default for WavTranscoder {
    fn default() -> Self {
        Self::new("webm")
    }
}

impl AudioTranscoder for WavTranscoder {
    fn to_wav(&self, data: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        let decoded = decode_to_mono(data, Some(&self.source_format))?;

        let samples = if decoded.sample_rate == TARGET_SAMPLE_RATE {
            decoded.samples
        } else {
            resample(&decoded.samples, decoded.sample_rate, TARGET_SAMPLE_RATE)?
        };

        let wav = encode_wav(&samples, TARGET_SAMPLE_RATE)?;

        tracing::debug!(
            source_rate = decoded.sample_rate,
            duration_secs = samples.len() as f32 / TARGET_SAMPLE_RATE as f32,
            bytes = wav.len(),
            "Audio converted to WAV"
        );

        Ok(wav)
    }
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, TranscodeError> {
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };
    let ratio = to_rate as f64 / from_rate as f64;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, RESAMPLE_CHUNK, 1)
        .map_err(|e| TranscodeError::ResampleFailed(format!("init: {e}")))?;

    let expected_len = (samples.len() as f64 * ratio) as usize;
    let mut output = Vec::with_capacity(expected_len + RESAMPLE_CHUNK);

    for chunk in samples.chunks(RESAMPLE_CHUNK) {
        let mut input = chunk.to_vec();
        input.resize(RESAMPLE_CHUNK, 0.0);

        let result = resampler
            .process(&[input], None)
            .map_err(|e| TranscodeError::ResampleFailed(e.to_string()))?;
        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    output.truncate(expected_len);
    Ok(output)
}

pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, TranscodeError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buffer = Vec::with_capacity(44 + samples.len() * 2);
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut buffer), spec)
            .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
        for &sample in samples {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| TranscodeError::EncodingFailed(e.to_string()))?;
    }

    Ok(buffer)
}
