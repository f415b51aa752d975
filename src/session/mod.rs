//! Interview session state
//!
//! A `Session` holds everything about one candidate's interview: the chosen
//! profile and stack, the rolling context window, and the full transcript.
//! Sessions live behind a `SessionStore` so the backend (in-memory today)
//! can be swapped without touching the orchestrator.

mod session;
mod store;

pub use session::{Session, TranscriptEntry};
pub use store::{InMemorySessionStore, SessionStore, SharedSession};
