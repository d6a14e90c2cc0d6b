//! Session error types.

use thiserror::Error;

use super::models::SessionId;
use crate::draw::DrawError;
use crate::input::InputError;

/// Session manager errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// No session with this ID
    #[error("Draw session not found: {0}")]
    NotFound(SessionId),

    /// Too many live sessions
    #[error("Session capacity reached ({0} sessions)")]
    CapacityReached(usize),

    /// Request parameters contradict each other
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Entry list could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Engine rejected the operation
    #[error(transparent)]
    Draw(#[from] DrawError),
}

impl SessionError {
    /// Get a client-safe error message
    ///
    /// Session IDs are not echoed back to clients.
    pub fn client_message(&self) -> String {
        match self {
            SessionError::NotFound(_) => "Draw session not found".to_string(),
            SessionError::CapacityReached(_) => {
                "Too many active draws, try again later".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
