use std::io::Cursor;

use sabda::application::ports::AudioTranscoder;
use sabda::infrastructure::audio::{TARGET_SAMPLE_RATE, WavTranscoder, encode_wav};

fn wav_spec(bytes: &[u8]) -> (hound::WavSpec, u32) {
    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    (spec, reader.duration())
}

fn stereo_tone(sample_rate: u32, seconds: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut buffer = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut buffer), spec).unwrap();
        for n in 0..sample_rate * seconds {
            let t = n as f32 / sample_rate as f32;
            let value = ((t * 440.0 * std::f32::consts::TAU).sin() * 8_000.0) as i16;
            writer.write_sample(value).unwrap();
            writer.write_sample(value).unwrap();
        }
        writer.finalize().unwrap();
    }
    buffer
}

#[test]
fn given_pcm_samples_when_encoding_then_writes_mono_16_bit_riff() {
    let wav = encode_wav(&[0.0, 0.5, -0.5, 1.0], 16_000).unwrap();

    assert_eq!(&wav[..4], b"RIFF");
    let (spec, frames) = wav_spec(&wav);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(frames, 4);
}

#[test]
fn given_target_rate_wav_when_transcoding_then_keeps_frame_count() {
    let input = encode_wav(&vec![0.25; 1_600], TARGET_SAMPLE_RATE).unwrap();

    let output = WavTranscoder::new("wav").to_wav(&input).unwrap();

    let (spec, frames) = wav_spec(&output);
    assert_eq!(spec.sample_rate, TARGET_SAMPLE_RATE);
    assert_eq!(frames, 1_600);
}

#[test]
fn given_stereo_cd_rate_wav_when_transcoding_then_resamples_to_mono_16k() {
    let input = stereo_tone(44_100, 1);

    let output = WavTranscoder::new("wav").to_wav(&input).unwrap();

    let (spec, frames) = wav_spec(&output);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, TARGET_SAMPLE_RATE);
    assert!(
        (15_000..=16_000).contains(&frames),
        "unexpected frame count {frames}"
    );
}

#[test]
fn given_mislabelled_wav_when_transcoding_then_probe_sniffs_content() {
    let input = encode_wav(&vec![0.1; 800], TARGET_SAMPLE_RATE).unwrap();

    let output = WavTranscoder::default().to_wav(&input);

    assert!(output.is_ok());
}

#[test]
fn given_garbage_when_transcoding_then_fails() {
    let result = WavTranscoder::default().to_wav(b"definitely not audio");

    assert!(result.is_err());
}

#[test]
fn given_empty_input_when_transcoding_then_fails() {
    assert!(WavTranscoder::default().to_wav(&[]).is_err());
}
