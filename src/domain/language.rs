use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native: &'static str) -> SupportedLanguage {
    SupportedLanguage { code, name, native }
}

pub static SUPPORTED_LANGUAGES: [SupportedLanguage; 23] = [
    lang("en-US", "English (US)", "English"),
    lang("hi-IN", "Hindi (India)", "हिंदी"),
    lang("bn-IN", "Bengali (India)", "বাংলা"),
    lang("te-IN", "Telugu (India)", "తెలుగు"),
    lang("ta-IN", "Tamil (India)", "தமிழ்"),
    lang("kn-IN", "Kannada (India)", "ಕನ್ನಡ"),
    lang("ml-IN", "Malayalam (India)", "മലയാളം"),
    lang("gu-IN", "Gujarati (India)", "ગુજરાતી"),
    lang("mr-IN", "Marathi (India)", "मराठी"),
    lang("pa-IN", "Punjabi (India)", "ਪੰਜਾਬੀ"),
    lang("or-IN", "Odia (India)", "ଓଡ଼ିଆ"),
    lang("as-IN", "Assamese (India)", "অসমীয়া"),
    lang("ur-IN", "Urdu (India)", "اردو"),
    lang("es-ES", "Spanish (Spain)", "Español"),
    lang("fr-FR", "French (France)", "Français"),
    lang("de-DE", "German (Germany)", "Deutsch"),
    lang("it-IT", "Italian (Italy)", "Italiano"),
    lang("pt-PT", "Portuguese (Portugal)", "Português"),
    lang("ru-RU", "Russian (Russia)", "Русский"),
    lang("ja-JP", "Japanese (Japan)", "日本語"),
    lang("ko-KR", "Korean (South Korea)", "한국어"),
    lang("zh-CN", "Chinese (Simplified)", "中文"),
    lang("ar-SA", "Arabic (Saudi Arabia)", "العربية"),
];

/// A locale tag drawn from [`SUPPORTED_LANGUAGES`].
///
/// Construction never fails: anything outside the allow-list becomes
/// [`LanguageCode::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    pub const DEFAULT: LanguageCode = LanguageCode("en-US");

    pub fn normalize(tag: Option<&str>) -> Self {
        let Some(tag) = tag.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::DEFAULT;
        };

        SUPPORTED_LANGUAGES
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(tag))
            .map(|l| Self(l.code))
            .unwrap_or(Self::DEFAULT)
    }

    pub fn is_supported(tag: &str) -> bool {
        SUPPORTED_LANGUAGES
            .iter()
            .any(|l| l.code.eq_ignore_ascii_case(tag.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// ISO 639-1 part of the tag, e.g. `hi` for `hi-IN`.
    pub fn primary_subtag(&self) -> &'static str {
        self.0.split('-').next().unwrap_or(self.0)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
