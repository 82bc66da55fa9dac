use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::domain::{SessionId, SessionState};

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

struct SessionEntry {
    state: SessionState,
    last_access: Instant,
}

/// Process-local sessions; nothing survives a restart. A session untouched
/// for longer than the idle timeout is dropped, as if its tab had closed.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every idle session and returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let timeout = self.idle_timeout;
        sessions.retain(|_, entry| entry.last_access.elapsed() <= timeout);
        before - sessions.len()
    }

    /// Sweeps idle sessions every `period` until the task is dropped.
    pub async fn run_idle_sweeper(self: Arc<Self>, period: Duration) {
        tracing::info!(
            idle_timeout_secs = self.idle_timeout.as_secs(),
            "Session sweeper started"
        );
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = self.evict_idle().await;
            if evicted > 0 {
                let remaining = self.len().await;
                tracing::debug!(evicted, remaining, "Evicted idle sessions");
            }
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<SessionState, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let Some(entry) = sessions.get_mut(id) else {
            return Ok(SessionState::default());
        };

        if entry.last_access.elapsed() > self.idle_timeout {
            sessions.remove(id);
            tracing::debug!(session = %id, "Session expired");
            return Ok(SessionState::default());
        }

        entry.last_access = Instant::now();
        Ok(entry.state.clone())
    }

    async fn save(&self, id: &SessionId, state: SessionState) -> Result<(), SessionStoreError> {
        self.sessions.write().await.insert(
            *id,
            SessionEntry {
                state,
                last_access: Instant::now(),
            },
        );
        Ok(())
    }
}
