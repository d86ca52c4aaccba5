use std::sync::Arc;

use crate::application::todos::TodoService;
use crate::infra::db::PostgresRepositories;

#[derive(Clone)]
pub struct ApiState {
    pub todos: Arc<TodoService>,
    /// Always set by the server binary. Router tests built over the in-memory store
    /// pass `None`, and health then answers 204 without a database check.
    pub db: Option<Arc<PostgresRepositories>>,
}

impl ApiState {
    pub fn new(todos: Arc<TodoService>, db: Option<Arc<PostgresRepositories>>) -> Self {
        Self { todos, db }
    }
}
