use super::error::ChunkSynthesisError;
use super::model::{BoundaryKind, ChunkResult, TimingEvent};
use crate::infrastructure::repositories::{SpeechEvent, SpeechSynthesizer, TICKS_PER_SECOND};

/// Convert a backend tick count to seconds. Callers sum ticks as integers
/// first; the division happens once per event.
fn ticks_to_seconds(ticks: u64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}

/// Synthesize one chunk of text through the backend and ingest its event
/// stream into a [`ChunkResult`] with chunk-local times in seconds.
///
/// A backend failure fails only this chunk; the caller drops it and keeps
/// the siblings (no retry at this layer).
pub async fn synthesize_chunk(
    synthesizer: &dyn SpeechSynthesizer,
    index: usize,
    text: &str,
    voice_id: &str,
) -> Result<ChunkResult, ChunkSynthesisError> {
    let events = synthesizer
        .synthesize(text, voice_id)
        .await
        .map_err(|reason| ChunkSynthesisError { index, reason })?;

    let mut audio = Vec::new();
    let mut timing = Vec::new();

    for event in events {
        match event {
            SpeechEvent::Audio(bytes) => audio.extend_from_slice(&bytes),
            SpeechEvent::WordBoundary {
                text,
                offset_ticks,
                duration_ticks,
            } => timing.push(boundary_event(
                text,
                offset_ticks,
                duration_ticks,
                BoundaryKind::Word,
            )),
            SpeechEvent::SentenceBoundary {
                text,
                offset_ticks,
                duration_ticks,
            } => timing.push(boundary_event(
                text,
                offset_ticks,
                duration_ticks,
                BoundaryKind::Sentence,
            )),
        }
    }

    let word_count = timing
        .iter()
        .filter(|e| e.kind == BoundaryKind::Word)
        .count();

    tracing::info!(
        chunk_index = index,
        audio_size = audio.len(),
        event_count = timing.len(),
        word_boundaries = word_count,
        "Chunk synthesis complete"
    );

    if word_count == 0 {
        tracing::warn!(
            chunk_index = index,
            event_count = timing.len(),
            "No word boundaries received for chunk"
        );
    }

    Ok(ChunkResult {
        index,
        audio,
        events: timing,
    })
}

fn boundary_event(
    text: String,
    offset_ticks: u64,
    duration_ticks: u64,
    kind: BoundaryKind,
) -> TimingEvent {
    let start = ticks_to_seconds(offset_ticks);
    let end = ticks_to_seconds(offset_ticks.saturating_add(duration_ticks));
    TimingEvent::new(text, start, end, kind)
}
