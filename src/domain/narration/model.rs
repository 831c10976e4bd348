use serde::{Deserialize, Serialize};

/// Kind of timing boundary reported by the speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    #[serde(rename = "WordBoundary")]
    Word,
    #[serde(rename = "SentenceBoundary")]
    Sentence,
}

impl std::fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryKind::Word => write!(f, "WordBoundary"),
            BoundaryKind::Sentence => write!(f, "SentenceBoundary"),
        }
    }
}

/// One spoken word or sentence placed on the track timeline, in seconds.
///
/// Serialized field names (`word`, `type`) match the alignment format the
/// player consumes. Invariant: `end >= start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingEvent {
    #[serde(rename = "word")]
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type")]
    pub kind: BoundaryKind,
}

impl TimingEvent {
    pub fn new(text: String, start: f64, end: f64, kind: BoundaryKind) -> Self {
        debug_assert!(end >= start, "timing event ends before it starts");
        Self {
            text,
            start,
            end,
            kind,
        }
    }

    /// Copy of this event shifted onto the global timeline.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            text: self.text.clone(),
            start: self.start + offset,
            end: self.end + offset,
            kind: self.kind,
        }
    }
}

/// Outcome of synthesizing a single text chunk.
///
/// `index` is the chunk's position in the original text; the merger orders
/// by it, never by completion order. Event times are chunk-local seconds.
#[derive(Debug, Clone)]
pub struct ChunkResult {
    pub index: usize,
    pub audio: Vec<u8>,
    pub events: Vec<TimingEvent>,
}

/// A full narration: concatenated audio plus events on one global timeline.
#[derive(Debug, Clone)]
pub struct MergedTrack {
    pub audio: Vec<u8>,
    pub events: Vec<TimingEvent>,
}

/// Caller-visible result of a narration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationResult {
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    pub alignment: Vec<TimingEvent>,
}
