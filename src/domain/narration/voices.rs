use super::language::LanguageCode;
use std::collections::HashMap;

/// Voice used when neither the requested language nor its default entry is
/// present in the catalog. Resolution never fails.
const GLOBAL_DEFAULT_VOICE: &str = "Joanna";

/// Narrative style tags accepted by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeStyle {
    Historical,
    Creative,
    Mythology,
    TimeTravel,
    SciFi,
    Mystery,
    Default,
}

impl NarrativeStyle {
    /// Parse a style tag from a request. Unknown tags fall back to
    /// `Default` rather than erroring.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Historical" => NarrativeStyle::Historical,
            "Creative" => NarrativeStyle::Creative,
            "Mythology" => NarrativeStyle::Mythology,
            "TimeTravel" => NarrativeStyle::TimeTravel,
            "SciFi" => NarrativeStyle::SciFi,
            "Mystery" => NarrativeStyle::Mystery,
            "Default" => NarrativeStyle::Default,
            _ => NarrativeStyle::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeStyle::Historical => "Historical",
            NarrativeStyle::Creative => "Creative",
            NarrativeStyle::Mythology => "Mythology",
            NarrativeStyle::TimeTravel => "TimeTravel",
            NarrativeStyle::SciFi => "SciFi",
            NarrativeStyle::Mystery => "Mystery",
            NarrativeStyle::Default => "Default",
        }
    }
}

impl std::fmt::Display for NarrativeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable mapping from (language, narrative style) to a Polly voice id.
///
/// Built once at process start and injected into the pipeline; resolution
/// degrades exact match → language default → [`GLOBAL_DEFAULT_VOICE`] and
/// never crosses into another language's table.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: HashMap<LanguageCode, HashMap<NarrativeStyle, String>>,
}

impl VoiceCatalog {
    pub fn new(voices: HashMap<LanguageCode, HashMap<NarrativeStyle, String>>) -> Self {
        Self { voices }
    }

    /// Resolve the voice for a language and style.
    pub fn resolve(&self, language: LanguageCode, style: NarrativeStyle) -> &str {
        let Some(by_style) = self.voices.get(&language) else {
            return GLOBAL_DEFAULT_VOICE;
        };
        by_style
            .get(&style)
            .or_else(|| by_style.get(&NarrativeStyle::Default))
            .map(String::as_str)
            .unwrap_or(GLOBAL_DEFAULT_VOICE)
    }
}

impl Default for VoiceCatalog {
    /// The standard catalog: neural voices per narrative style.
    fn default() -> Self {
        let english: HashMap<NarrativeStyle, String> = [
            (NarrativeStyle::Historical, "Amy"),    // British female, formal
            (NarrativeStyle::Creative, "Joey"),     // US male, energetic
            (NarrativeStyle::Mythology, "Kajal"),   // en-IN, suits the mystical register
            (NarrativeStyle::TimeTravel, "Joanna"),
            (NarrativeStyle::SciFi, "Stephen"),
            (NarrativeStyle::Mystery, "Matthew"),   // serious narration
            (NarrativeStyle::Default, "Matthew"),
        ]
        .into_iter()
        .map(|(style, voice)| (style, voice.to_string()))
        .collect();

        // Polly ships a single hi-IN neural voice, so every style resolves
        // through the language default.
        let hindi: HashMap<NarrativeStyle, String> =
            [(NarrativeStyle::Default, "Kajal".to_string())]
                .into_iter()
                .collect();

        let mut voices = HashMap::new();
        voices.insert(LanguageCode::English, english);
        voices.insert(LanguageCode::Hindi, hindi);
        Self { voices }
    }
}
