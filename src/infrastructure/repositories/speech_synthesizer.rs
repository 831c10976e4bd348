use async_trait::async_trait;

/// One tick is 100 nanoseconds; boundary offsets and durations arrive in
/// this unit from the speech backend.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

/// A tagged event produced by the speech backend while synthesizing one
/// chunk of text.
///
/// Boundary times are kept in backend-native ticks so the conversion to
/// seconds happens exactly once, at ingestion, from integer sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// A run of encoded audio bytes (MP3 frames).
    Audio(Vec<u8>),
    WordBoundary {
        text: String,
        offset_ticks: u64,
        duration_ticks: u64,
    },
    SentenceBoundary {
        text: String,
        offset_ticks: u64,
        duration_ticks: u64,
    },
}

/// Port for the external speech-synthesis backend.
/// Abstracts the underlying provider (AWS Polly, Azure Speech, etc.)
///
/// Implementations are responsible for:
/// - Producing audio bytes for exactly one chunk of text per call
/// - Reporting word/sentence boundaries in native ticks where the provider
///   exposes them (a provider may legitimately emit none)
/// - Ignoring provider event kinds outside the three expected ones
/// - Being safe to call concurrently: one call is issued per chunk with no
///   fan-out bound, sharing a single client
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize one chunk of text with the given voice.
    ///
    /// Returns the backend's event sequence: audio data interleaved with
    /// any timing boundaries, in stream order.
    ///
    /// # Errors
    /// Returns an error if the backend call fails; the caller drops the
    /// chunk and continues with its siblings.
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<SpeechEvent>, String>;
}
