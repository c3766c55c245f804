use sabda::domain::{DEFAULT_RATE_WPM, DEFAULT_VOLUME, VoiceSettings};

#[test]
fn given_no_values_when_building_then_uses_defaults() {
    let settings = VoiceSettings::from_request(None, None);

    assert_eq!(settings.rate_wpm(), DEFAULT_RATE_WPM);
    assert_eq!(settings.volume(), DEFAULT_VOLUME);
}

#[test]
fn given_out_of_range_values_when_building_then_clamps() {
    let fast = VoiceSettings::from_request(Some(10_000.0), Some(4.0));
    let slow = VoiceSettings::from_request(Some(-5.0), Some(-1.0));

    assert_eq!(fast.rate_wpm(), 450);
    assert_eq!(fast.volume(), 1.0);
    assert_eq!(slow.rate_wpm(), 80);
    assert_eq!(slow.volume(), 0.0);
}

#[test]
fn given_non_finite_values_when_building_then_uses_defaults() {
    let settings = VoiceSettings::from_request(Some(f64::NAN), Some(f64::INFINITY));

    assert_eq!(settings, VoiceSettings::default());
}
