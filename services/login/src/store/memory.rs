//! In-memory session store backing the `memory` session backend

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::{SessionStore, StoreResult};
use crate::models::{Session, SessionId};

#[derive(Debug, Clone)]
struct Entry {
    session: Session,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Session map held in memory
///
/// Every entry lives for the configured TTL from its last write. Expired
/// entries read as absent and are purged on the next write.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of entries held, expired ones included until purged
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.session.clone())),
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions.get(id).is_some_and(|entry| entry.is_expired(now)) {
            sessions.remove(id);
        }
        Ok(None)
    }

    async fn set(&self, id: &SessionId, session: &Session) -> StoreResult<()> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| !entry.is_expired(now));
        sessions.insert(
            *id,
            Entry {
                session: session.clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn destroy(&self, id: &SessionId) -> StoreResult<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}
