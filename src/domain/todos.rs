//! The todo entity and the inputs that mutate it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

/// A single todo as stored in the database and in the cached collection snapshot.
///
/// Field names are part of the cache wire format and must stay lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub topic: String,
    pub description: String,
    pub status: String,
}

/// Fields supplied by a caller when creating a todo; the id is assigned separately.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub topic: String,
    pub description: String,
    pub status: String,
}

impl NewTodo {
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_present(&self.topic, "topic")?;
        ensure_present(&self.description, "description")?;
        ensure_present(&self.status, "status")
    }

    /// Attach a freshly generated identifier.
    pub fn into_todo(self) -> Todo {
        self.into_todo_with_id(Uuid::new_v4().to_string())
    }

    pub fn into_todo_with_id(self, id: impl Into<String>) -> Todo {
        Todo {
            id: id.into(),
            topic: self.topic,
            description: self.description,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoStatus {
    pub id: String,
    pub status: String,
}

impl UpdateTodoStatus {
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_present(&self.id, "id")?;
        ensure_present(&self.status, "status")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodo {
    pub id: String,
}

impl DeleteTodo {
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_present(&self.id, "id")
    }
}

fn ensure_present(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(())
}
