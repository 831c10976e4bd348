use serde::{Deserialize, Serialize};

/// Languages the narration pipeline can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Hindi => "hi",
        }
    }

    /// Parse an explicit language tag from a request. Unrecognized tags
    /// return `None` and the caller falls back to detection.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("en") {
            Some(LanguageCode::English)
        } else if tag.eq_ignore_ascii_case("hi") {
            Some(LanguageCode::Hindi)
        } else {
            None
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How many characters of the input are worth inspecting. Stories run to
/// thousands of characters; the opening 500 settle the script.
const DETECTION_SAMPLE_CHARS: usize = 500;

/// Below this many Devanagari characters the sample is treated as noise
/// (quoted names, stray marks) as long as enough Latin text is present.
const MIN_DEVANAGARI_CHARS: usize = 10;

/// Latin letter count that confirms the default language in rule 1.
const LATIN_DOMINANCE_CHARS: usize = 20;

/// Detect the dominant language of a text sample.
///
/// Counts Devanagari codepoints (U+0900..=U+097F) against ASCII Latin
/// letters over the first [`DETECTION_SAMPLE_CHARS`] characters and applies,
/// in order:
///
/// 1. fewer than 10 Devanagari and more than 20 Latin → English
/// 2. more Devanagari than Latin → Hindi
/// 3. otherwise → English
///
/// Pure and deterministic; a heuristic, not a guarantee.
pub fn detect_language(text: &str) -> LanguageCode {
    let mut devanagari = 0usize;
    let mut latin = 0usize;

    for c in text.chars().take(DETECTION_SAMPLE_CHARS) {
        if ('\u{0900}'..='\u{097F}').contains(&c) {
            devanagari += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    if devanagari < MIN_DEVANAGARI_CHARS && latin > LATIN_DOMINANCE_CHARS {
        return LanguageCode::English;
    }
    if devanagari > latin {
        return LanguageCode::Hindi;
    }
    LanguageCode::English
}
