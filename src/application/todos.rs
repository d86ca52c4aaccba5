//! Todo coordinator: read-through caching of the full collection in front of the store.
//!
//! Every mutation writes the store first and then refreshes the cached snapshot stored
//! under [`TODOS_CACHE_KEY`]. A cache read failure of any kind is handled like a miss and
//! triggers a rebuild from the store. Store errors, snapshot decode errors, and cache
//! write errors abort the operation. A committed store write is never rolled back.
//!
//! Concurrent mutations may interleave between their cache read and cache write; the
//! snapshot can then lose an update until the next rebuild. The store stays correct.

use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use tracing::debug;

use crate::application::cache::{CacheError, SnapshotCache};
use crate::application::repos::{RepoError, TodosRepo};
use crate::application::snapshot::{self, NO_EXPIRATION, SnapshotError, TODOS_CACHE_KEY};
use crate::domain::todos::{DeleteTodo, Todo, UpdateTodoStatus};

const SOURCE: &str = "todo_service::application::todos";

pub const SNAPSHOT_HIT_TOTAL: &str = "todo_snapshot_hit_total";
pub const SNAPSHOT_MISS_TOTAL: &str = "todo_snapshot_miss_total";
pub const SNAPSHOT_REBUILD_TOTAL: &str = "todo_snapshot_rebuild_total";

#[derive(Debug, Error)]
pub enum TodoServiceError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodosRepo>,
    cache: Arc<dyn SnapshotCache>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodosRepo>, cache: Arc<dyn SnapshotCache>) -> Self {
        Self { repo, cache }
    }

    /// Return the whole collection, from the cache when present.
    pub async fn find_all(&self) -> Result<Vec<Todo>, TodoServiceError> {
        if let Some(todos) = self.cached_snapshot("find_all").await? {
            return Ok(todos);
        }

        let todos = self.rebuild("find_all").await?;
        self.store_snapshot(&todos).await?;
        Ok(todos)
    }

    /// Persist a todo whose id has already been assigned, then append it to the snapshot.
    pub async fn create(&self, todo: Todo) -> Result<(), TodoServiceError> {
        self.repo.save(&todo).await?;

        let todos = match self.cached_snapshot("create").await? {
            Some(mut todos) => {
                todos.push(todo);
                todos
            }
            // The store already contains the new row.
            None => self.rebuild("create").await?,
        };

        self.store_snapshot(&todos).await
    }

    /// Change the status of a todo. Only the first cached entry with a matching id is touched.
    pub async fn update_status(&self, params: UpdateTodoStatus) -> Result<(), TodoServiceError> {
        self.repo.update_status(&params).await?;

        let todos = match self.cached_snapshot("update_status").await? {
            Some(mut todos) => {
                if let Some(entry) = todos.iter_mut().find(|todo| todo.id == params.id) {
                    entry.status = params.status;
                }
                todos
            }
            None => self.rebuild("update_status").await?,
        };

        self.store_snapshot(&todos).await
    }

    /// Delete a todo. Every cached entry carrying the id is dropped.
    pub async fn delete(&self, params: DeleteTodo) -> Result<(), TodoServiceError> {
        self.repo.delete(&params).await?;

        let todos = match self.cached_snapshot("delete").await? {
            Some(mut todos) => {
                todos.retain(|todo| todo.id != params.id);
                todos
            }
            None => self.rebuild("delete").await?,
        };

        self.store_snapshot(&todos).await
    }

    /// `Ok(None)` on any cache read failure; decode failures are returned as errors.
    async fn cached_snapshot(
        &self,
        op: &'static str,
    ) -> Result<Option<Vec<Todo>>, TodoServiceError> {
        match self.cache.get(TODOS_CACHE_KEY).await {
            Ok(raw) => {
                counter!(SNAPSHOT_HIT_TOTAL, "op" => op).increment(1);
                debug!(target: SOURCE, op, "todo snapshot cache hit");
                Ok(Some(snapshot::decode(&raw)?))
            }
            Err(err) => {
                counter!(SNAPSHOT_MISS_TOTAL, "op" => op).increment(1);
                debug!(target: SOURCE, op, error = %err, "todo snapshot unavailable");
                Ok(None)
            }
        }
    }

    async fn rebuild(&self, op: &'static str) -> Result<Vec<Todo>, TodoServiceError> {
        let todos = self.repo.find_all().await?;
        counter!(SNAPSHOT_REBUILD_TOTAL, "op" => op).increment(1);
        debug!(
            target: SOURCE,
            op,
            count = todos.len(),
            "rebuilt todo snapshot from store"
        );
        Ok(todos)
    }

    async fn store_snapshot(&self, todos: &[Todo]) -> Result<(), TodoServiceError> {
        let raw = snapshot::encode(todos)?;
        self.cache
            .set(TODOS_CACHE_KEY, &raw, NO_EXPIRATION)
            .await
            .map_err(TodoServiceError::from)
    }
}
