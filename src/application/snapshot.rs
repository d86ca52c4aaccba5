//! JSON codec for the cached todo collection.

use thiserror::Error;

use crate::domain::todos::Todo;

/// The single cache key holding the whole collection.
pub const TODOS_CACHE_KEY: &str = "todos";

/// Expiration value meaning "keep until overwritten".
pub const NO_EXPIRATION: u64 = 0;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode todo snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode todo snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

pub fn encode(todos: &[Todo]) -> Result<String, SnapshotError> {
    serde_json::to_string(todos).map_err(SnapshotError::Encode)
}

/// Decode a cached snapshot. A literal `null` is read as an empty collection.
pub fn decode(raw: &str) -> Result<Vec<Todo>, SnapshotError> {
    let todos: Option<Vec<Todo>> = serde_json::from_str(raw).map_err(SnapshotError::Decode)?;
    Ok(todos.unwrap_or_default())
}
