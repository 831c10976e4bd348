use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub aws_region: String,
    pub audio_dir: String,
    pub audio_url_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            audio_dir: env::var("AUDIO_DIR").unwrap_or_else(|_| "static/audio".to_string()),
            audio_url_prefix: env::var("AUDIO_URL_PREFIX")
                .unwrap_or_else(|_| "/static/audio".to_string()),
        };

        Ok(config)
    }
}
