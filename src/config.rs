use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub stt: SttConfig,
    pub llm: LlmConfig,
    pub tts: TtsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SttConfig {
    /// OpenAI-compatible transcription endpoint (e.g. a local whisper-server)
    pub base_url: String,
    pub model: String,
    /// Language hint passed on every transcription request
    pub language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Number of exchanges kept in each session's rolling context
    pub context_window: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TtsConfig {
    pub base_url: String,
    pub voice_id: String,
    pub model_id: String,
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("INTERVIEWER").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// API keys for the external collaborators.
///
/// Kept out of `Config` entirely so they can never leak through the
/// configuration echo endpoint or a debug-printed config struct.
#[derive(Clone)]
pub struct Secrets {
    pub openrouter_api_key: String,
    pub elevenlabs_api_key: String,
}

impl Secrets {
    /// Read secrets from the environment. Missing keys are fatal: the
    /// process must not start serving without them.
    pub fn from_env() -> Result<Self> {
        let openrouter_api_key =
            std::env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY is not set")?;
        let elevenlabs_api_key =
            std::env::var("ELEVENLABS_API_KEY").context("ELEVENLABS_API_KEY is not set")?;

        Ok(Self {
            openrouter_api_key,
            elevenlabs_api_key,
        })
    }
}
