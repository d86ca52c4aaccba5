//! Snapshot cache backends: Redis for deployments, an in-process map for tests and single-node runs.

mod memory;
mod redis;

pub use memory::InMemoryCache;
pub use redis::RedisCache;
