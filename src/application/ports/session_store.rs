use async_trait::async_trait;

use crate::domain::{SessionId, SessionState};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored state, or an empty one for an unseen session.
    async fn load(&self, id: &SessionId) -> Result<SessionState, SessionStoreError>;

    async fn save(&self, id: &SessionId, state: SessionState) -> Result<(), SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
