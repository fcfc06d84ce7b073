//! Session storage in Redis

use async_trait::async_trait;
use common::cache::RedisPool;
use tracing::info;

use crate::{
    models::{Session, SessionId},
    store::{SessionStore, StoreResult},
};

/// Sessions kept as JSON under `session:<id>` with a fixed lifetime
#[derive(Clone)]
pub struct RedisSessionStore {
    redis_pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Create a new Redis session store
    pub fn new(redis_pool: RedisPool, ttl_seconds: u64) -> Self {
        Self {
            redis_pool,
            ttl_seconds,
        }
    }

    /// Get Redis health status
    pub async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.redis_pool.health_check().await?)
    }
}

fn session_key(id: &SessionId) -> String {
    format!("session:{}", id)
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, id: &SessionId) -> StoreResult<Option<Session>> {
        match self.redis_pool.get(&session_key(id)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, id: &SessionId, session: &Session) -> StoreResult<()> {
        info!("Creating session for user: {}", session.id);

        let raw = serde_json::to_string(session)?;
        self.redis_pool
            .set(&session_key(id), &raw, Some(self.ttl_seconds))
            .await?;

        Ok(())
    }

    async fn destroy(&self, id: &SessionId) -> StoreResult<()> {
        info!("Deleting session: {}", id);

        self.redis_pool.delete(&session_key(id)).await?;
        Ok(())
    }
}
