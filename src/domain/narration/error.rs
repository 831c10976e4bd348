/// A single chunk's backend call failed. Recovered locally: the chunk is
/// logged and dropped, siblings keep running, nothing reaches the caller.
#[derive(Debug, thiserror::Error)]
#[error("chunk {index} synthesis failed: {reason}")]
pub struct ChunkSynthesisError {
    pub index: usize,
    pub reason: String,
}

/// Failure of a whole narration request. Callers get either a complete
/// result or one of these; partial success is never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("synthesis produced no audio")]
    EmptyResult,

    #[error("failed to store narration audio: {0}")]
    StorageWrite(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
