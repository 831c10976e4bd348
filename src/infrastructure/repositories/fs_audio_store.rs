use super::audio_store::AudioStore;
use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

/// Filesystem implementation of the audio store.
///
/// Writes one `<uuid>.mp3` per call under a fixed directory and returns a
/// locator of the form `<url_prefix>/<uuid>.mp3`. The directory is created
/// once at construction and never cleaned up by this crate.
pub struct FsAudioStore {
    audio_dir: PathBuf,
    url_prefix: String,
}

impl FsAudioStore {
    pub async fn new(audio_dir: PathBuf, url_prefix: String) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(&audio_dir).await?;
        tracing::info!(audio_dir = %audio_dir.display(), "Audio directory ready");
        Ok(Self {
            audio_dir,
            url_prefix,
        })
    }
}

#[async_trait]
impl AudioStore for FsAudioStore {
    async fn store(&self, audio: &[u8]) -> Result<String, String> {
        let filename = format!("{}.mp3", Uuid::new_v4());
        let path = self.audio_dir.join(&filename);

        tokio::fs::write(&path, audio).await.map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path.display(),
                "Failed to write audio asset"
            );
            format!("Failed to write audio asset: {}", e)
        })?;

        tracing::debug!(
            path = %path.display(),
            audio_size = audio.len(),
            "Audio asset written"
        );

        Ok(format!("{}/{}", self.url_prefix, filename))
    }
}
