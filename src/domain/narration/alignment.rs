use super::model::{BoundaryKind, ChunkResult, MergedTrack, TimingEvent};

/// Pause inserted between paragraphs on the merged timeline, in seconds.
pub const PARAGRAPH_PAUSE_SECS: f64 = 0.3;

/// Reassemble per-chunk results into a single track.
///
/// Results arrive in completion order; output order is established by
/// chunk index alone. Audio is concatenated in index order and every
/// timing event is re-based onto the global timeline: a chunk's events
/// are shifted by the running offset, and after a chunk that produced
/// events the offset advances to that chunk's last shifted end plus
/// [`PARAGRAPH_PAUSE_SECS`]. A chunk with audio but no events leaves the
/// offset where the last event-bearing chunk put it.
pub fn merge_results(mut results: Vec<ChunkResult>) -> MergedTrack {
    results.sort_by_key(|r| r.index);

    let mut audio = Vec::new();
    let mut events = Vec::new();
    let mut time_offset = 0.0;

    for result in results {
        audio.extend_from_slice(&result.audio);

        let mut chunk_last_end = None;
        for event in &result.events {
            let shifted = event.shifted(time_offset);
            chunk_last_end = Some(shifted.end);
            events.push(shifted);
        }
        if let Some(end) = chunk_last_end {
            time_offset = end + PARAGRAPH_PAUSE_SECS;
        }
    }

    MergedTrack { audio, events }
}

/// Derive word-level timing from sentence-level timing.
///
/// Used when the backend reported no word boundaries at all. Each
/// sentence's duration is divided evenly among its whitespace-separated
/// words; the sentence event itself is kept, appended after its words.
/// Events that are not sentences, or whose text holds no words, pass
/// through unchanged. The result is an approximation, uniformly spaced
/// within each sentence.
pub fn synthesize_word_boundaries(events: &[TimingEvent]) -> Vec<TimingEvent> {
    let mut aligned = Vec::new();

    for event in events {
        if event.kind != BoundaryKind::Sentence {
            aligned.push(event.clone());
            continue;
        }

        let words: Vec<&str> = event.text.split_whitespace().collect();
        if words.is_empty() {
            aligned.push(event.clone());
            continue;
        }

        let per_word = (event.end - event.start) / words.len() as f64;
        let mut cursor = event.start;
        for word in &words {
            aligned.push(TimingEvent::new(
                word.to_string(),
                cursor,
                cursor + per_word,
                BoundaryKind::Word,
            ));
            cursor += per_word;
        }
        aligned.push(event.clone());
    }

    let word_count = aligned
        .iter()
        .filter(|e| e.kind == BoundaryKind::Word)
        .count();
    tracing::info!(
        word_boundaries = word_count,
        "Synthesized word boundaries from sentence timing"
    );

    aligned
}
