//! Key/value cache port used to hold the serialized todo collection.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a cache backend.
///
/// Callers in the application layer treat every variant the same way; the split only
/// exists so adapters can log something useful.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache miss for key `{key}`")]
    Miss { key: String },
    #[error("cache backend error: {0}")]
    Backend(String),
}

impl CacheError {
    pub fn miss(key: impl Into<String>) -> Self {
        Self::Miss { key: key.into() }
    }

    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

#[async_trait]
pub trait SnapshotCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<String, CacheError>;

    /// Store `value` under `key`. An `expiration_secs` of zero keeps the entry forever.
    async fn set(&self, key: &str, value: &str, expiration_secs: u64) -> Result<(), CacheError>;

    async fn del(&self, key: &str) -> Result<(), CacheError>;
}
