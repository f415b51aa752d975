use thiserror::Error;

/// Errors surfaced by the interview service.
///
/// `SessionNotFound` is a client error (404); everything a collaborator
/// throws at us is a server-side failure (500). Collaborator failures are
/// not retried and never commit partial session state.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("{collaborator} request failed: {message}")]
    Collaborator {
        collaborator: &'static str,
        message: String,
    },
}

impl ServiceError {
    pub fn collaborator(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator,
            message: message.into(),
        }
    }
}
