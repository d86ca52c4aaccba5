use std::{collections::HashMap, sync::RwLock, time::Duration};

use async_trait::async_trait;
use tokio::time::Instant;

use crate::application::cache::{CacheError, SnapshotCache};
use crate::infra::lock::{rw_read, rw_write};

const SOURCE: &str = "infra::cache::memory";

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|deadline| now < deadline)
    }
}

/// Process-local key/value cache with optional per-entry expiration.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, ignoring expiration. Intended for assertions.
    pub fn peek(&self, key: &str) -> Option<String> {
        rw_read(&self.entries, SOURCE, "peek")
            .get(key)
            .map(|entry| entry.value.clone())
    }
}

#[async_trait]
impl SnapshotCache for InMemoryCache {
    async fn get(&self, key: &str) -> Result<String, CacheError> {
        let now = Instant::now();
        let entries = rw_read(&self.entries, SOURCE, "get");
        entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::miss(key))
    }

    async fn set(&self, key: &str, value: &str, expiration_secs: u64) -> Result<(), CacheError> {
        let now = Instant::now();
        let expires_at = (expiration_secs > 0).then(|| now + Duration::from_secs(expiration_secs));

        let mut entries = rw_write(&self.entries, SOURCE, "set");
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), CacheError> {
        rw_write(&self.entries, SOURCE, "del").remove(key);
        Ok(())
    }
}
