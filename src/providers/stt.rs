use super::SpeechToText;
use crate::error::ServiceError;
use serde::Deserialize;
use tracing::{debug, warn};

/// OpenAI-compatible transcription client (`/audio/transcriptions`).
///
/// Works against a local whisper-server as well as the hosted OpenAI
/// endpoint; the deployment picks the base URL. The API key is optional
/// because a local server typically has none.
pub struct WhisperHttp {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl WhisperHttp {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            client,
        }
    }
}

#[async_trait::async_trait]
impl SpeechToText for WhisperHttp {
    async fn transcribe(&self, audio: Vec<u8>, language: &str) -> Result<String, ServiceError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| ServiceError::collaborator("stt", e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("language", language.to_string());

        let mut request = self.client.post(&url).multipart(form);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::collaborator("stt", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %error_body, "Transcription returned error");
            return Err(ServiceError::collaborator(
                "stt",
                format!("status {}: {}", status.as_u16(), error_body),
            ));
        }

        let api_response: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::collaborator("stt", format!("malformed response: {e}")))?;

        // Silence comes back as empty text, which is a valid result.
        let text = api_response.text.trim().to_string();
        debug!(chars = text.len(), "Transcription completed");

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_transcription_response() {
        let data = r#"{"text": "Uma variável guarda um valor"}"#;
        let parsed: TranscriptionResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.text, "Uma variável guarda um valor");
    }

    #[test]
    fn parse_empty_transcription() {
        let data = r#"{"text": ""}"#;
        let parsed: TranscriptionResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.text.is_empty());
    }
}
