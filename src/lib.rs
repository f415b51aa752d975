pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod interview;
pub mod profiles;
pub mod protocol;
pub mod providers;
pub mod session;

pub use config::{Config, Secrets};
pub use context::{ContextWindow, Exchange};
pub use error::ServiceError;
pub use http::{create_router, AppState};
pub use interview::{InterviewConfig, Orchestrator};
pub use profiles::{Profile, ProfileRegistry, ProfileSummary};
pub use protocol::{parse_turn, Turn};
pub use providers::{ChatMessage, ChatModel, Role, SpeechSynthesizer, SpeechToText};
pub use session::{InMemorySessionStore, Session, SessionStore, TranscriptEntry};
