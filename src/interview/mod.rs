//! Interview orchestration
//!
//! Wires a session's context window and profile instruction into calls to
//! the STT, chat, and TTS collaborators and assembles the replies. One
//! orchestrator serves all sessions.

mod orchestrator;

pub use orchestrator::{
    Evaluation, InterviewConfig, InterviewStarted, MessageReply, Orchestrator, SessionInfo,
};
