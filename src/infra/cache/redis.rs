use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

use crate::application::cache::{CacheError, SnapshotCache};
use crate::infra::error::InfraError;

/// Redis-backed cache sharing one multiplexed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisCache {
    manager: ConnectionManager,
}

impl RedisCache {
    /// Open a connection manager for `url` and verify the server answers `PING`.
    pub async fn connect(url: &str) -> Result<Self, InfraError> {
        let client = Client::open(url)
            .map_err(|err| InfraError::cache(format!("invalid redis url: {err}")))?;
        let mut manager = ConnectionManager::new(client)
            .await
            .map_err(|err| InfraError::cache(format!("could not connect to redis: {err}")))?;

        let _: String = redis::cmd("PING")
            .query_async(&mut manager)
            .await
            .map_err(|err| InfraError::cache(format!("redis ping failed: {err}")))?;

        info!(target = "todo_service::cache", "Connected to redis");
        Ok(Self { manager })
    }
}

#[async_trait]
impl SnapshotCache for RedisCache {
    async fn get(&self, key: &str) -> Result<String, CacheError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await.map_err(CacheError::backend)?;
        value.ok_or_else(|| CacheError::miss(key))
    }

    async fn set(&self, key: &str, value: &str, expiration_secs: u64) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        if expiration_secs == 0 {
            conn.set::<_, _, ()>(key, value)
                .await
                .map_err(CacheError::backend)
        } else {
            conn.set_ex::<_, _, ()>(key, value, expiration_secs)
                .await
                .map_err(CacheError::backend)
        }
    }

    async fn del(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(key).await.map_err(CacheError::backend)
    }
}
