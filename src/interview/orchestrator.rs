use crate::error::ServiceError;
use crate::profiles::{ProfileRegistry, ProfileSummary};
use crate::protocol::{parse_turn, Turn};
use crate::providers::{ChatMessage, ChatModel, SpeechSynthesizer, SpeechToText};
use crate::session::{Session, SessionStore, TranscriptEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Fixed opening line fed to the chat model as the candidate's first turn.
const GREETING: &str = "Olá! Estou pronto para começar a entrevista.";

/// Evaluation requests run colder and longer than regular turns.
const EVAL_TEMPERATURE: f32 = 0.3;
const EVAL_MAX_TOKENS: u32 = 1500;

/// Tunables for the interview loop.
#[derive(Debug, Clone)]
pub struct InterviewConfig {
    /// Exchanges kept in each session's rolling context
    pub context_window: usize,
    /// Sampling temperature for regular turns
    pub temperature: f32,
    /// Token cap for regular turns
    pub max_tokens: u32,
    /// Language hint for transcription
    pub language: String,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            context_window: 6,
            temperature: 0.7,
            max_tokens: 1000,
            language: "pt".to_string(),
        }
    }
}

/// Result of starting an interview: the session handle plus the opening turn.
#[derive(Debug, Clone)]
pub struct InterviewStarted {
    pub session_id: String,
    pub profile: String,
    pub stack: String,
    pub turn: Turn,
}

/// Result of one message round trip.
#[derive(Debug, Clone)]
pub struct MessageReply {
    pub turn: Turn,
    pub context_size: usize,
}

/// Final evaluation report.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub evaluation: String,
    pub profile: String,
    pub stack: String,
}

/// Session metadata snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub profile: String,
    pub stack: String,
    pub created_at: DateTime<Utc>,
    pub message_count: usize,
    pub context_size: usize,
}

/// Drives the interview conversation across all sessions.
pub struct Orchestrator {
    store: Arc<dyn SessionStore>,
    chat: Arc<dyn ChatModel>,
    stt: Arc<dyn SpeechToText>,
    tts: Arc<dyn SpeechSynthesizer>,
    registry: ProfileRegistry,
    config: InterviewConfig,
}

impl Orchestrator {
    pub fn new(
        store: Arc<dyn SessionStore>,
        chat: Arc<dyn ChatModel>,
        stt: Arc<dyn SpeechToText>,
        tts: Arc<dyn SpeechSynthesizer>,
        registry: ProfileRegistry,
        config: InterviewConfig,
    ) -> Self {
        Self {
            store,
            chat,
            stt,
            tts,
            registry,
            config,
        }
    }

    /// All available interviewer profiles (instruction text withheld).
    pub fn list_profiles(&self) -> Vec<ProfileSummary> {
        self.registry.summaries()
    }

    /// Start a new interview session and produce the opening interviewer turn.
    ///
    /// The session is only stored after the chat model answers, so a
    /// collaborator failure leaves no half-created session behind.
    pub async fn start_interview(
        &self,
        profile: &str,
        stack: &str,
        session_id: Option<String>,
    ) -> Result<InterviewStarted, ServiceError> {
        let session_id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let instruction = self.registry.instruction_for(profile, stack);
        let messages = vec![ChatMessage::system(instruction), ChatMessage::user(GREETING)];

        let raw = self
            .chat
            .complete(&messages, self.config.temperature, self.config.max_tokens)
            .await?;
        let turn = parse_turn(&raw);

        let mut session = Session::new(&session_id, profile, stack, self.config.context_window);
        session.context.add_exchange(GREETING, &raw);
        session
            .transcript
            .push(TranscriptEntry::interviewer(&turn.spoken, &turn.screen_content));
        self.store.insert(session).await;

        info!(session_id = %session_id, profile, stack, "Started interview session");

        Ok(InterviewStarted {
            session_id,
            profile: profile.to_string(),
            stack: stack.to_string(),
            turn,
        })
    }

    /// Transcribe a candidate audio clip. The session id is only used for
    /// diagnostics; transcription does not touch session state.
    pub async fn transcribe(
        &self,
        session_id: &str,
        audio: Vec<u8>,
    ) -> Result<String, ServiceError> {
        let text = self.stt.transcribe(audio, &self.config.language).await?;
        info!(session_id, chars = text.len(), "Transcribed candidate audio");
        Ok(text)
    }

    /// Process one candidate message and produce the next interviewer turn.
    ///
    /// The exchange is committed to the context window and transcript only
    /// after the chat model answers; on failure the session is unchanged.
    pub async fn send_message(
        &self,
        session_id: &str,
        text: &str,
        is_code: bool,
    ) -> Result<MessageReply, ServiceError> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;
        let mut session = shared.lock().await;

        let instruction = self
            .registry
            .instruction_for(&session.profile, &session.stack);

        let mut messages = vec![ChatMessage::system(instruction)];
        messages.extend(session.context.messages());
        messages.push(ChatMessage::user(text));

        let raw = self
            .chat
            .complete(&messages, self.config.temperature, self.config.max_tokens)
            .await?;
        let turn = parse_turn(&raw);

        session.context.add_exchange(text, &raw);
        session.transcript.push(TranscriptEntry::candidate(text, is_code));
        session
            .transcript
            .push(TranscriptEntry::interviewer(&turn.spoken, &turn.screen_content));

        info!(session_id, context_size = session.context.exchange_count(), "Processed message");

        Ok(MessageReply {
            turn,
            context_size: session.context.exchange_count(),
        })
    }

    /// Synthesize interviewer speech. Returns a complete encoded audio buffer.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ServiceError> {
        let audio = self.tts.synthesize(text).await?;
        info!(bytes = audio.len(), "Synthesized speech");
        Ok(audio)
    }

    /// Produce the final evaluation report for a session.
    ///
    /// The session stays live: it can keep receiving messages and be
    /// evaluated again.
    pub async fn evaluate(&self, session_id: &str) -> Result<Evaluation, ServiceError> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;
        let session = shared.lock().await;

        let instruction = self
            .registry
            .instruction_for(&session.profile, &session.stack);

        let mut messages = vec![ChatMessage::system(instruction)];
        messages.extend(session.context.messages());
        messages.push(ChatMessage::user(evaluation_instruction(
            &session.profile,
            &session.stack,
        )));

        let raw = self
            .chat
            .complete(&messages, EVAL_TEMPERATURE, EVAL_MAX_TOKENS)
            .await?;

        // The report is expected in the on-screen field only.
        let turn = parse_turn(&raw);

        info!(session_id, "Generated evaluation");

        Ok(Evaluation {
            evaluation: turn.screen_content,
            profile: session.profile.clone(),
            stack: session.stack.clone(),
        })
    }

    /// Session metadata, or NotFound for an unknown id.
    pub async fn session_info(&self, session_id: &str) -> Result<SessionInfo, ServiceError> {
        let shared = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| ServiceError::SessionNotFound(session_id.to_string()))?;
        let session = shared.lock().await;

        Ok(SessionInfo {
            session_id: session.id.clone(),
            profile: session.profile.clone(),
            stack: session.stack.clone(),
            created_at: session.created_at,
            message_count: session.transcript.len(),
            context_size: session.context.exchange_count(),
        })
    }

    /// Discard a session and all of its state.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), ServiceError> {
        if !self.store.remove(session_id).await {
            return Err(ServiceError::SessionNotFound(session_id.to_string()));
        }
        info!(session_id, "Deleted session");
        Ok(())
    }
}

/// Fixed evaluation request appended after the conversation history.
fn evaluation_instruction(profile: &str, stack: &str) -> String {
    format!(
        "Baseado na entrevista completa para a vaga de {profile} em {stack}, \
gere uma avaliação final do candidato.\n\
\n\
FORMATO DE RESPOSTA:\n\
<codigo>\n\
## Avaliação Final - {} {}\n\
\n\
### ✅ Pontos Fortes\n\
- [Liste os pontos fortes demonstrados]\n\
\n\
### ⚠️ Pontos Fracos\n\
- [Liste áreas que precisam melhorar]\n\
\n\
### 💡 Sugestões de Melhoria\n\
- [Sugestões concretas e acionáveis]\n\
\n\
### 📊 Nota Final\n\
**[X]/10** - [Justificativa breve]\n\
</codigo>",
        capitalize(profile),
        capitalize(stack)
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
