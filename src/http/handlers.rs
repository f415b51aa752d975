use super::state::AppState;
use crate::error::ServiceError;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,

    /// Interviewer profile key
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Technology stack label
    #[serde(default = "default_stack")]
    pub stack: String,
}

fn default_profile() -> String {
    "pleno".to_string()
}

fn default_stack() -> String {
    "backend".to_string()
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub session_id: String,
    pub profile: String,
    pub stack: String,
    pub spoken: String,
    pub screen_content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub session_id: String,
    pub text: String,
    #[serde(default)]
    pub is_code: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub spoken: String,
    pub screen_content: String,
    pub context_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a service error onto the HTTP taxonomy: unknown session is a client
/// error, collaborator failures are generic server errors.
fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Collaborator { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Service banner
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "online",
        "service": state.config.service.name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /api/profiles
/// List all available interviewer profiles
pub async fn list_profiles(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "profiles": state.orchestrator.list_profiles(),
    }))
}

/// POST /api/interview/start
/// Start a new interview session and return the opening turn
pub async fn start_interview(
    State(state): State<AppState>,
    Json(req): Json<StartInterviewRequest>,
) -> impl IntoResponse {
    match state
        .orchestrator
        .start_interview(&req.profile, &req.stack, req.session_id)
        .await
    {
        Ok(started) => (
            StatusCode::OK,
            Json(StartInterviewResponse {
                session_id: started.session_id,
                profile: started.profile,
                stack: started.stack,
                spoken: started.turn.spoken,
                screen_content: started.turn.screen_content,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to start interview: {}", e);
            error_response(e)
        }
    }
}

/// POST /api/transcribe
/// Transcribe an uploaded audio clip (multipart: session_id + audio)
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut session_id = String::new();
    let mut audio: Option<Vec<u8>> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => match field.name() {
                Some("session_id") => match field.text().await {
                    Ok(text) => session_id = text,
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Invalid session_id field: {}", e),
                            }),
                        )
                            .into_response();
                    }
                },
                Some("audio") => match field.bytes().await {
                    Ok(bytes) => audio = Some(bytes.to_vec()),
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Invalid audio field: {}", e),
                            }),
                        )
                            .into_response();
                    }
                },
                _ => {}
            },
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Malformed multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some(audio) = audio else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing audio field".to_string(),
            }),
        )
            .into_response();
    };

    match state.orchestrator.transcribe(&session_id, audio).await {
        Ok(transcription) => (
            StatusCode::OK,
            Json(TranscriptionResponse {
                transcription,
                session_id,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to transcribe audio: {}", e);
            error_response(e)
        }
    }
}

/// POST /api/interview/message
/// Send a candidate message (transcribed or typed) and get the next turn
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> impl IntoResponse {
    match state
        .orchestrator
        .send_message(&req.session_id, &req.text, req.is_code)
        .await
    {
        Ok(reply) => (
            StatusCode::OK,
            Json(MessageResponse {
                spoken: reply.turn.spoken,
                screen_content: reply.turn.screen_content,
                context_size: reply.context_size,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to process message: {}", e);
            error_response(e)
        }
    }
}

/// POST /api/synthesize
/// Convert interviewer text to speech
pub async fn synthesize(
    State(state): State<AppState>,
    Json(req): Json<SynthesizeRequest>,
) -> impl IntoResponse {
    match state.orchestrator.synthesize(&req.text).await {
        Ok(audio) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/mpeg"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=speech.mp3",
                ),
            ],
            audio,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to synthesize speech: {}", e);
            error_response(e)
        }
    }
}

/// POST /api/interview/evaluate
/// Generate the final interview evaluation
pub async fn evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluationRequest>,
) -> impl IntoResponse {
    match state.orchestrator.evaluate(&req.session_id).await {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(e) => {
            error!("Failed to generate evaluation: {}", e);
            error_response(e)
        }
    }
}

/// GET /api/session/:session_id
/// Session metadata
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.orchestrator.session_info(&session_id).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/session/:session_id
/// Discard a session and all of its state
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.orchestrator.delete_session(&session_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteResponse {
                status: "deleted".to_string(),
                session_id,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/config
/// Current configuration. Secrets never live in `Config`, so the echo is
/// safe by construction.
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "service": state.config.service,
        "stt": state.config.stt,
        "llm": {
            "model": state.config.llm.model,
            "temperature": state.config.llm.temperature,
            "max_tokens": state.config.llm.max_tokens,
            "context_window": state.config.llm.context_window,
        },
    }))
}
