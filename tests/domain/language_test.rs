use std::collections::HashSet;

use sabda::domain::{LanguageCode, SUPPORTED_LANGUAGES};

#[test]
fn given_allow_list_when_inspected_then_has_23_unique_codes() {
    let codes: HashSet<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();

    assert_eq!(SUPPORTED_LANGUAGES.len(), 23);
    assert_eq!(codes.len(), 23);
    assert!(codes.contains("en-US"));
}

#[test]
fn given_supported_tag_when_normalizing_then_maps_to_itself() {
    assert_eq!(LanguageCode::normalize(Some("ta-IN")).as_str(), "ta-IN");
}

#[test]
fn given_mixed_case_tag_when_normalizing_then_returns_canonical_spelling() {
    assert_eq!(LanguageCode::normalize(Some("  ZH-cn ")).as_str(), "zh-CN");
}

#[test]
fn given_unknown_missing_or_blank_tag_when_normalizing_then_defaults_to_en_us() {
    assert_eq!(LanguageCode::normalize(Some("tlh-KX")), LanguageCode::DEFAULT);
    assert_eq!(LanguageCode::normalize(None), LanguageCode::DEFAULT);
    assert_eq!(LanguageCode::normalize(Some("")).as_str(), "en-US");
}

#[test]
fn given_tag_when_taking_primary_subtag_then_returns_language_part() {
    assert_eq!(LanguageCode::normalize(Some("hi-IN")).primary_subtag(), "hi");
}
