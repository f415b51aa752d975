use super::SpeechSynthesizer;
use crate::config::TtsConfig;
use crate::error::ServiceError;
use tracing::{debug, warn};

/// ElevenLabs text-to-speech client. Returns one complete MP3 buffer per
/// request; no streaming.
pub struct ElevenLabsTts {
    config: TtsConfig,
    api_key: String,
    client: reqwest::Client,
}

impl ElevenLabsTts {
    pub fn new(config: TtsConfig, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            api_key: api_key.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for ElevenLabsTts {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ServiceError> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        );

        let body = serde_json::json!({
            "text": text,
            "model_id": self.config.model_id,
            "voice_settings": {
                "stability": self.config.stability,
                "similarity_boost": self.config.similarity_boost,
                "style": self.config.style,
                "use_speaker_boost": self.config.use_speaker_boost,
            },
        });

        debug!(voice = %self.config.voice_id, chars = text.len(), "Sending synthesis request");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::collaborator("tts", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %error_body, "Synthesis returned error");
            return Err(ServiceError::collaborator(
                "tts",
                format!("status {}: {}", status.as_u16(), error_body),
            ));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| ServiceError::collaborator("tts", e.to_string()))?;

        debug!(bytes = audio.len(), "Synthesis completed");

        Ok(audio.to_vec())
    }
}
