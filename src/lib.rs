pub mod domain;
pub mod infrastructure;

pub use domain::narration::{
    BoundaryKind, NarrationError, NarrationResult, NarrationService, NarrationServiceApi,
    TimingEvent, VoiceCatalog,
};
pub use infrastructure::config::Config;
pub use infrastructure::repositories::{
    AudioStore, FsAudioStore, PollySpeechSynthesizer, SpeechEvent, SpeechSynthesizer,
};

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;

/// Wire a ready-to-use [`NarrationService`] from configuration.
///
/// Loads AWS configuration for the configured region, builds the Polly
/// client, prepares the audio directory, and injects the default voice
/// catalog. Hosts that want different parts (another synthesizer, another
/// store, a custom catalog) can call [`NarrationService::new`] directly.
pub async fn bootstrap(config: Config) -> anyhow::Result<NarrationService> {
    tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let synthesizer = Arc::new(PollySpeechSynthesizer::new(polly_client));

    let audio_store = Arc::new(
        FsAudioStore::new(
            PathBuf::from(&config.audio_dir),
            config.audio_url_prefix.clone(),
        )
        .await
        .context("failed to prepare the audio directory")?,
    );

    Ok(NarrationService::new(
        synthesizer,
        audio_store,
        VoiceCatalog::default(),
    ))
}
