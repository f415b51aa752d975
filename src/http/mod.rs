//! HTTP API for the interview frontend
//!
//! - GET  /                          - service banner
//! - GET  /health                    - health check
//! - GET  /api/profiles              - list interviewer profiles
//! - POST /api/interview/start      - start a session, returns opening turn
//! - POST /api/transcribe           - audio upload → text
//! - POST /api/interview/message    - candidate message → interviewer turn
//! - POST /api/synthesize           - text → MP3 bytes
//! - POST /api/interview/evaluate   - final evaluation report
//! - GET  /api/session/:id          - session metadata
//! - DELETE /api/session/:id        - discard a session
//! - GET  /api/config               - configuration echo (no secrets)

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
