use super::alignment::{merge_results, synthesize_word_boundaries};
use super::chunker::split_into_chunks;
use super::error::NarrationError;
use super::language::{detect_language, LanguageCode};
use super::model::{BoundaryKind, NarrationResult};
use super::synthesis::synthesize_chunk;
use super::voices::{NarrativeStyle, VoiceCatalog};
use crate::infrastructure::repositories::{AudioStore, SpeechSynthesizer};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

const MAX_TEXT_CHARS: usize = 10_000;

pub struct NarrationService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_store: Arc<dyn AudioStore>,
    catalog: VoiceCatalog,
}

impl NarrationService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio_store: Arc<dyn AudioStore>,
        catalog: VoiceCatalog,
    ) -> Self {
        Self {
            synthesizer,
            audio_store,
            catalog,
        }
    }
}

#[async_trait]
pub trait NarrationServiceApi: Send + Sync {
    /// Narrate a story: text in, stored audio plus word-level timing out.
    ///
    /// This operation:
    /// - Resolves the language (explicit tag if recognized, else detection)
    ///   and the narration voice for the requested style
    /// - Synthesizes paragraphs concurrently, then reassembles them in
    ///   original text order on a single timeline
    /// - Synthesizes approximate word timing when the backend reports none
    /// - Stores the merged audio and returns its locator with the alignment
    ///
    /// Either the whole narration succeeds or a single failure is returned;
    /// individual paragraph failures are absorbed, not surfaced.
    async fn synthesize(
        &self,
        text: &str,
        style: &str,
        language: Option<&str>,
    ) -> Result<NarrationResult, NarrationError>;
}

#[async_trait]
impl NarrationServiceApi for NarrationService {
    async fn synthesize(
        &self,
        text: &str,
        style: &str,
        language: Option<&str>,
    ) -> Result<NarrationResult, NarrationError> {
        // Validate input
        if text.trim().is_empty() {
            return Err(NarrationError::Invalid("Text cannot be empty".to_string()));
        }
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(NarrationError::Invalid(
                "Text must be 10,000 characters or less".to_string(),
            ));
        }

        tracing::info!(
            text_length = text.len(),
            style = style,
            "Narration synthesis request"
        );

        // 1. Resolve language and voice
        let language = self.resolve_language(text, language);
        let style = NarrativeStyle::from_tag(style);
        let voice_id = self.catalog.resolve(language, style);

        tracing::info!(
            language = %language,
            style = %style,
            voice_id = voice_id,
            "Voice resolved"
        );

        // 2. Split into paragraph chunks
        let chunks = split_into_chunks(text);

        tracing::info!(chunk_count = chunks.len(), "Text chunked for synthesis");

        // 3. Synthesize all chunks concurrently; results come back in
        //    submission order, which is chunk-index order
        let tasks = chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| synthesize_chunk(self.synthesizer.as_ref(), index, chunk, voice_id));
        let outcomes = join_all(tasks).await;

        // 4. Drop failed chunks, keep the rest
        let mut results = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(error) => {
                    tracing::warn!(
                        chunk_index = error.index,
                        error = %error,
                        "Dropping failed chunk"
                    );
                }
            }
        }

        // 5. Merge onto one timeline
        let mut track = merge_results(results);
        if track.audio.is_empty() {
            return Err(NarrationError::EmptyResult);
        }

        // 6. Synthesize word timing if the backend gave us none
        let has_words = track.events.iter().any(|e| e.kind == BoundaryKind::Word);
        if !has_words {
            tracing::warn!("No word boundaries in merged alignment, synthesizing from sentence timing");
            track.events = synthesize_word_boundaries(&track.events);
        }

        // 7. Store the merged audio
        let audio_url = self
            .audio_store
            .store(&track.audio)
            .await
            .map_err(NarrationError::StorageWrite)?;

        tracing::info!(
            audio_url = %audio_url,
            audio_size = track.audio.len(),
            event_count = track.events.len(),
            "Narration complete"
        );

        Ok(NarrationResult {
            audio_url,
            alignment: track.events,
        })
    }
}

impl NarrationService {
    fn resolve_language(&self, text: &str, explicit: Option<&str>) -> LanguageCode {
        if let Some(tag) = explicit {
            if let Some(language) = LanguageCode::from_tag(tag) {
                return language;
            }
            tracing::warn!(language_tag = tag, "Unrecognized language tag, detecting instead");
        }
        detect_language(text)
    }
}
