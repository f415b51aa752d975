use super::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Handle to one stored session.
///
/// The per-session mutex serializes concurrent requests against the same
/// session id; independent sessions never contend.
pub type SharedSession = Arc<Mutex<Session>>;

/// Storage abstraction for interview sessions.
///
/// The orchestrator only talks to this trait, so the in-memory map can be
/// replaced by an external cache or database without touching it.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session, replacing any existing one with the same id.
    async fn insert(&self, session: Session);

    /// Fetch a session handle by id.
    async fn get(&self, id: &str) -> Option<SharedSession>;

    /// Remove a session. Returns false if the id was unknown.
    async fn remove(&self, id: &str) -> bool;
}

/// In-memory session store (session_id → session). No persistence, no TTL;
/// sessions live until deleted or the process exits.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SharedSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), Arc::new(Mutex::new(session)));
    }

    async fn get(&self, id: &str) -> Option<SharedSession> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    async fn remove(&self, id: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).is_some()
    }
}
