pub mod alignment;
pub mod chunker;
pub mod error;
pub mod language;
pub mod model;
pub mod service;
pub mod synthesis;
pub mod voices;

pub use alignment::{merge_results, synthesize_word_boundaries, PARAGRAPH_PAUSE_SECS};
pub use chunker::split_into_chunks;
pub use error::{ChunkSynthesisError, NarrationError};
pub use language::{detect_language, LanguageCode};
pub use model::{BoundaryKind, ChunkResult, MergedTrack, NarrationResult, TimingEvent};
pub use service::{NarrationService, NarrationServiceApi};
pub use voices::{NarrativeStyle, VoiceCatalog};
