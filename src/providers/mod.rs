//! External collaborator seams: speech-to-text, chat model, speech synthesis.
//!
//! Each collaborator is a narrow async trait with one HTTP client behind it:
//! - STT: OpenAI-compatible `/audio/transcriptions` (local whisper-server)
//! - LLM: OpenAI-compatible `/chat/completions` (OpenRouter)
//! - TTS: ElevenLabs text-to-speech
//!
//! Failures are not retried here; they surface as `ServiceError::Collaborator`
//! and leave session state untouched.

mod llm;
mod stt;
mod tts;

pub use llm::OpenRouterChat;
pub use stt::WhisperHttp;
pub use tts::ElevenLabsTts;

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// Speaker role in the chat wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message sent to the chat model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Chat completion collaborator.
///
/// Takes the full ordered message list and returns the raw response text,
/// tags and all. The two-tag turn convention is enforced by instruction
/// only; a response without tags is still a valid response.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ServiceError>;
}

/// Speech-to-text collaborator.
///
/// Accepts a short audio clip and a language hint. Silence or
/// low-confidence input comes back as empty text, not an error.
#[async_trait::async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>, language: &str) -> Result<String, ServiceError>;
}

/// Text-to-speech collaborator. Returns a complete encoded audio buffer.
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ServiceError>;
}
