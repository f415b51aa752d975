use crate::context::ContextWindow;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry in a session's ordered transcript log.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum TranscriptEntry {
    Candidate {
        text: String,
        is_code: bool,
        timestamp: DateTime<Utc>,
    },
    Interviewer {
        spoken: String,
        screen_content: String,
        timestamp: DateTime<Utc>,
    },
}

impl TranscriptEntry {
    pub fn candidate(text: impl Into<String>, is_code: bool) -> Self {
        Self::Candidate {
            text: text.into(),
            is_code,
            timestamp: Utc::now(),
        }
    }

    pub fn interviewer(spoken: impl Into<String>, screen_content: impl Into<String>) -> Self {
        Self::Interviewer {
            spoken: spoken.into(),
            screen_content: screen_content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Complete per-candidate interview state.
pub struct Session {
    /// Opaque unique identifier
    pub id: String,

    /// Interviewer profile key (e.g. "junior", "pleno")
    pub profile: String,

    /// Technology stack label (e.g. "backend")
    pub stack: String,

    /// Rolling window of recent exchanges sent to the chat model
    pub context: ContextWindow,

    /// Full ordered transcript of both sides of the conversation
    pub transcript: Vec<TranscriptEntry>,

    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        profile: impl Into<String>,
        stack: impl Into<String>,
        context_capacity: usize,
    ) -> Self {
        Self {
            id: id.into(),
            profile: profile.into(),
            stack: stack.into(),
            context: ContextWindow::new(context_capacity),
            transcript: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
