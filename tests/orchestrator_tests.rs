// End-to-end orchestrator tests with faked collaborators. No network: the
// chat/STT/TTS seams are replaced with scripted implementations.

use ai_interviewer::error::ServiceError;
use ai_interviewer::interview::{InterviewConfig, Orchestrator};
use ai_interviewer::profiles::ProfileRegistry;
use ai_interviewer::providers::{ChatMessage, ChatModel, Role, SpeechSynthesizer, SpeechToText};
use ai_interviewer::session::InMemorySessionStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Chat fake that always answers with the same raw response and records the
/// message lists it was called with.
struct ScriptedChat {
    response: String,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedChat {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for ScriptedChat {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, ServiceError> {
        self.calls.lock().await.push(messages.to_vec());
        Ok(self.response.clone())
    }
}

/// Chat fake that always fails, for failure-propagation tests.
struct FailingChat;

#[async_trait::async_trait]
impl ChatModel for FailingChat {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _temperature: f32,
        _max_tokens: u32,
    ) -> Result<String, ServiceError> {
        Err(ServiceError::collaborator("llm", "connection refused"))
    }
}

struct FixedStt(&'static str);

#[async_trait::async_trait]
impl SpeechToText for FixedStt {
    async fn transcribe(&self, _audio: Vec<u8>, _language: &str) -> Result<String, ServiceError> {
        Ok(self.0.to_string())
    }
}

struct FixedTts(Vec<u8>);

#[async_trait::async_trait]
impl SpeechSynthesizer for FixedTts {
    async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, ServiceError> {
        Ok(self.0.clone())
    }
}

const SCRIPTED_TURN: &str =
    "<falar>Vamos começar com uma pergunta básica.</falar>\n<codigo>\n### Pergunta 1\nExplique o que é uma variável.\n</codigo>";

fn orchestrator_with_chat(chat: Arc<dyn ChatModel>) -> Orchestrator {
    Orchestrator::new(
        Arc::new(InMemorySessionStore::new()),
        chat,
        Arc::new(FixedStt("Uma variável guarda um valor")),
        Arc::new(FixedTts(vec![0xFF, 0xF3, 0x00])),
        ProfileRegistry::builtin(),
        InterviewConfig::default(),
    )
}

#[tokio::test]
async fn test_start_interview_returns_opening_turn() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();

    assert!(!started.session_id.is_empty());
    assert_eq!(started.profile, "junior");
    assert_eq!(started.stack, "backend");
    assert!(!started.turn.spoken.is_empty());
    assert!(started.turn.screen_content.contains("Pergunta 1"));
}

#[tokio::test]
async fn test_start_interview_accepts_caller_session_id() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let started = orchestrator
        .start_interview("pleno", "backend", Some("my-session".to_string()))
        .await
        .unwrap();
    assert_eq!(started.session_id, "my-session");

    let info = orchestrator.session_info("my-session").await.unwrap();
    assert_eq!(info.profile, "pleno");
    assert_eq!(info.context_size, 1); // greeting exchange
    assert_eq!(info.message_count, 1); // opening interviewer turn
}

#[tokio::test]
async fn test_send_message_grows_context_and_transcript() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();

    let reply = orchestrator
        .send_message(&started.session_id, "Uma variável guarda um valor", false)
        .await
        .unwrap();

    // greeting exchange + new exchange
    assert_eq!(reply.context_size, 2);
    assert!(!reply.turn.spoken.is_empty());

    let info = orchestrator.session_info(&started.session_id).await.unwrap();
    assert_eq!(info.context_size, 2);
    // opening turn + candidate message + interviewer reply
    assert_eq!(info.message_count, 3);
}

#[tokio::test]
async fn test_send_message_replays_context_to_chat_model() {
    let chat = Arc::new(ScriptedChat::new(SCRIPTED_TURN));
    let orchestrator = orchestrator_with_chat(chat.clone());

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();
    orchestrator
        .send_message(&started.session_id, "Minha resposta", false)
        .await
        .unwrap();

    let calls = chat.calls.lock().await;
    assert_eq!(calls.len(), 2);

    // Second call: system instruction, greeting exchange replay, new text
    let messages = &calls[1];
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].content.contains("backend"));
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[3].role, Role::User);
    assert_eq!(messages[3].content, "Minha resposta");
}

#[tokio::test]
async fn test_send_message_unknown_session_is_not_found() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let err = orchestrator
        .send_message("does-not-exist", "olá", false)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));

    // The failed call must not create a session as a side effect
    let err = orchestrator.session_info("does-not-exist").await.unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));
}

#[tokio::test]
async fn test_chat_failure_leaves_session_state_untouched() {
    let chat = Arc::new(ScriptedChat::new(SCRIPTED_TURN));
    let orchestrator = orchestrator_with_chat(chat.clone());

    let started = orchestrator
        .start_interview("junior", "backend", Some("s1".to_string()))
        .await
        .unwrap();

    let failing = orchestrator_with_chat(Arc::new(FailingChat));
    let err = failing
        .start_interview("junior", "backend", Some("s2".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Collaborator { .. }));

    // The failed start never stored a session
    let err = failing.session_info("s2").await.unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));

    // The healthy session is unaffected
    let info = orchestrator.session_info(&started.session_id).await.unwrap();
    assert_eq!(info.context_size, 1);
}

#[tokio::test]
async fn test_evaluate_returns_screen_content_report() {
    let report = "<codigo>\n## Avaliação Final - Junior Backend\n\n### ✅ Pontos Fortes\n- Fundamentos sólidos\n\n### 📊 Nota Final\n**7/10** - Bom domínio básico\n</codigo>";
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(report)));

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();

    let evaluation = orchestrator.evaluate(&started.session_id).await.unwrap();
    assert!(evaluation.evaluation.contains("Avaliação Final"));
    assert!(evaluation.evaluation.contains("7/10"));
    assert_eq!(evaluation.profile, "junior");
    assert_eq!(evaluation.stack, "backend");
}

#[tokio::test]
async fn test_session_stays_live_after_evaluation() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let started = orchestrator
        .start_interview("senior", "backend", None)
        .await
        .unwrap();

    orchestrator.evaluate(&started.session_id).await.unwrap();

    // Evaluation does not freeze the session: more messages and a second
    // evaluation still work.
    let reply = orchestrator
        .send_message(&started.session_id, "Mais uma resposta", false)
        .await
        .unwrap();
    assert_eq!(reply.context_size, 2);

    orchestrator.evaluate(&started.session_id).await.unwrap();
}

#[tokio::test]
async fn test_evaluate_unknown_session_is_not_found() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let err = orchestrator.evaluate("missing").await.unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));
}

#[tokio::test]
async fn test_delete_session_then_info_is_not_found() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();

    orchestrator.delete_session(&started.session_id).await.unwrap();

    let err = orchestrator
        .session_info(&started.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));

    let err = orchestrator
        .delete_session(&started.session_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::SessionNotFound(_)));
}

#[tokio::test]
async fn test_transcribe_delegates_to_stt() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let text = orchestrator
        .transcribe("any-session", vec![0u8; 16])
        .await
        .unwrap();
    assert_eq!(text, "Uma variável guarda um valor");
}

#[tokio::test]
async fn test_synthesize_returns_audio_buffer() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new(SCRIPTED_TURN)));

    let audio = orchestrator.synthesize("Olá, candidato").await.unwrap();
    assert_eq!(audio, vec![0xFF, 0xF3, 0x00]);
}

#[tokio::test]
async fn test_malformed_model_output_degrades_to_empty_fields() {
    let orchestrator = orchestrator_with_chat(Arc::new(ScriptedChat::new("no tags here at all")));

    let started = orchestrator
        .start_interview("junior", "backend", None)
        .await
        .unwrap();

    // Missing tags are not an error: fields are empty, state is committed
    assert_eq!(started.turn.spoken, "");
    assert_eq!(started.turn.screen_content, "");

    let info = orchestrator.session_info(&started.session_id).await.unwrap();
    assert_eq!(info.context_size, 1);
}

#[tokio::test]
async fn test_context_window_caps_replayed_history() {
    let chat = Arc::new(ScriptedChat::new(SCRIPTED_TURN));
    let orchestrator = Orchestrator::new(
        Arc::new(InMemorySessionStore::new()),
        chat.clone(),
        Arc::new(FixedStt("")),
        Arc::new(FixedTts(Vec::new())),
        ProfileRegistry::builtin(),
        InterviewConfig {
            context_window: 2,
            ..InterviewConfig::default()
        },
    );

    let started = orchestrator
        .start_interview("pleno", "backend", None)
        .await
        .unwrap();

    for i in 0..5 {
        let reply = orchestrator
            .send_message(&started.session_id, &format!("resposta {i}"), false)
            .await
            .unwrap();
        assert!(reply.context_size <= 2);
    }

    // Last call saw: system + 2 exchanges (4 messages) + new text
    let calls = chat.calls.lock().await;
    let last = calls.last().unwrap();
    assert_eq!(last.len(), 6);
    assert_eq!(last[0].role, Role::System);
    assert_eq!(last[5].content, "resposta 4");
}
