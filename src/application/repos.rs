//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::todos::{DeleteTodo, Todo, UpdateTodoStatus};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Durable storage for todo records. Knows nothing about caching.
#[async_trait]
pub trait TodosRepo: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, RepoError>;

    async fn save(&self, todo: &Todo) -> Result<(), RepoError>;

    async fn update_status(&self, params: &UpdateTodoStatus) -> Result<(), RepoError>;

    async fn delete(&self, params: &DeleteTodo) -> Result<(), RepoError>;
}
