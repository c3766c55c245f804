pub const DEFAULT_RATE_WPM: u32 = 150;
pub const DEFAULT_VOLUME: f32 = 0.9;

const MIN_RATE_WPM: u32 = 80;
const MAX_RATE_WPM: u32 = 450;

/// Speaking rate and loudness for synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceSettings {
    rate_wpm: u32,
    volume: f32,
}

impl VoiceSettings {
    /// Builds settings from loosely-typed request values, clamping out-of-range
    /// numbers and substituting defaults for missing or non-finite ones.
    pub fn from_request(speed: Option<f64>, volume: Option<f64>) -> Self {
        let rate_wpm = speed
            .filter(|s| s.is_finite())
            .map(|s| (s.round().max(0.0) as u32).clamp(MIN_RATE_WPM, MAX_RATE_WPM))
            .unwrap_or(DEFAULT_RATE_WPM);

        let volume = volume
            .filter(|v| v.is_finite())
            .map(|v| (v as f32).clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_VOLUME);

        Self { rate_wpm, volume }
    }

    pub fn rate_wpm(&self) -> u32 {
        self.rate_wpm
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate_wpm: DEFAULT_RATE_WPM,
            volume: DEFAULT_VOLUME,
        }
    }
}
