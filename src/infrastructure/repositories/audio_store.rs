use async_trait::async_trait;

/// Destination for merged narration audio.
///
/// Implementations are responsible for:
/// - Naming each asset with a fresh unique identifier
/// - Returning a locator the caller can hand out as-is
///
/// Retention and cleanup of stored assets belong to whoever owns the
/// destination, not to this crate.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Persist one audio asset, returning its locator.
    async fn store(&self, audio: &[u8]) -> Result<String, String>;
}
