use super::speech_synthesizer::{SpeechEvent, SpeechSynthesizer, TICKS_PER_SECOND};
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, SpeechMarkType, VoiceId},
    Client as PollyClient,
};
use serde::Deserialize;
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_CHUNK_CHARS: usize = 3000;

/// Polly speech marks report onsets in milliseconds
const TICKS_PER_MILLISECOND: u64 = TICKS_PER_SECOND / 1000;

/// Speaking rate used to close the last mark of each type, which has no
/// following onset to measure against (1000 characters per minute)
const ESTIMATED_MS_PER_CHAR: u64 = 60;

/// AWS Polly implementation of the speech synthesizer port.
///
/// One `synthesize` call makes two Polly requests for the same text and
/// voice: an Mp3 request for the audio and a Json request for word and
/// sentence speech marks. Marks carry onsets only, so each boundary's
/// duration is the gap to the next mark of the same type.
pub struct PollySpeechSynthesizer {
    polly_client: Arc<PollyClient>,
}

impl PollySpeechSynthesizer {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Call AWS Polly for the audio rendition of the text
    async fn fetch_audio(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String> {
        tracing::debug!(
            voice_id = voice_id,
            engine = "neural",
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech for audio"
        );

        let response = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(VoiceId::from(voice_id))
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice_id = voice_id,
                    text_length = text.len(),
                    "AWS Polly audio synthesis failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        let audio = response.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio.into_bytes().to_vec())
    }

    /// Call AWS Polly for newline-delimited JSON speech marks
    async fn fetch_speech_marks(&self, text: &str, voice_id: &str) -> Result<Vec<u8>, String> {
        tracing::debug!(
            voice_id = voice_id,
            engine = "neural",
            output_format = "Json",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech for speech marks"
        );

        let response = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(VoiceId::from(voice_id))
            .output_format(OutputFormat::Json)
            .speech_mark_types(SpeechMarkType::Word)
            .speech_mark_types(SpeechMarkType::Sentence)
            .engine(Engine::Neural)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice_id = voice_id,
                    text_length = text.len(),
                    "AWS Polly speech mark synthesis failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        let marks = response.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect speech mark stream from Polly response");
            format!("Failed to read speech mark stream: {}", e)
        })?;

        Ok(marks.into_bytes().to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice_id: &str) -> Result<Vec<SpeechEvent>, String> {
        let char_count = text.chars().count();
        if char_count > MAX_CHUNK_CHARS {
            return Err(format!(
                "Chunk is {} characters, above Polly's limit of {}",
                char_count, MAX_CHUNK_CHARS
            ));
        }

        let start_time = std::time::Instant::now();

        let audio = self.fetch_audio(text, voice_id).await?;
        let mark_bytes = self.fetch_speech_marks(text, voice_id).await?;
        let marks = parse_speech_marks(&mark_bytes);

        let mut events = Vec::with_capacity(marks.len() + 1);
        events.push(SpeechEvent::Audio(audio));
        events.extend(marks_to_events(&marks));

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = char_count,
            mark_count = marks.len(),
            "Chunk synthesis round trip completed"
        );

        Ok(events)
    }
}

/// One line of Polly's speech mark output, e.g.
/// `{"time":6,"type":"word","start":0,"end":4,"value":"Mary"}`.
/// Byte offsets into the input text are present but unused here.
#[derive(Debug, Deserialize)]
struct SpeechMark {
    time: u64,
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

fn parse_speech_marks(raw: &[u8]) -> Vec<SpeechMark> {
    let mut marks = Vec::new();
    for line in raw.split(|byte| *byte == b'\n') {
        if line.is_empty() {
            continue;
        }
        match serde_json::from_slice::<SpeechMark>(line) {
            Ok(mark) => marks.push(mark),
            Err(error) => {
                tracing::debug!(error = %error, "Skipping unparsable speech mark line");
            }
        }
    }
    marks
}

fn marks_to_events(marks: &[SpeechMark]) -> Vec<SpeechEvent> {
    let mut events = Vec::with_capacity(marks.len());

    for (position, mark) in marks.iter().enumerate() {
        let is_word = match mark.kind.as_str() {
            "word" => true,
            "sentence" => false,
            other => {
                tracing::debug!(mark_type = other, "Skipping unsupported speech mark type");
                continue;
            }
        };

        // Mark times come from backend JSON; saturate rather than overflow.
        let end_ms = next_same_type_onset(marks, position)
            .unwrap_or_else(|| mark.time.saturating_add(estimated_speech_ms(&mark.value)));
        let offset_ticks = mark.time.saturating_mul(TICKS_PER_MILLISECOND);
        let duration_ticks = end_ms
            .saturating_sub(mark.time)
            .saturating_mul(TICKS_PER_MILLISECOND);

        events.push(if is_word {
            SpeechEvent::WordBoundary {
                text: mark.value.clone(),
                offset_ticks,
                duration_ticks,
            }
        } else {
            SpeechEvent::SentenceBoundary {
                text: mark.value.clone(),
                offset_ticks,
                duration_ticks,
            }
        });
    }

    events
}

fn next_same_type_onset(marks: &[SpeechMark], position: usize) -> Option<u64> {
    let kind = marks[position].kind.as_str();
    marks[position + 1..]
        .iter()
        .find(|mark| mark.kind == kind)
        .map(|mark| mark.time)
}

fn estimated_speech_ms(text: &str) -> u64 {
    text.chars().count() as u64 * ESTIMATED_MS_PER_CHAR
}
