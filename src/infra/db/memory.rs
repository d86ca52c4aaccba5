//! Process-local todo store backing the router and coordinator tests.
//!
//! The server binary always runs against Postgres.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::repos::{RepoError, TodosRepo};
use crate::domain::todos::{DeleteTodo, Todo, UpdateTodoStatus};
use crate::infra::lock::{rw_read, rw_write};

const SOURCE: &str = "infra::db::memory";

/// Insertion-ordered todo rows with the same error contract as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryTodosRepo {
    rows: RwLock<Vec<Todo>>,
}

impl InMemoryTodosRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Todo>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn rows(&self) -> Vec<Todo> {
        rw_read(&self.rows, SOURCE, "rows").clone()
    }
}

#[async_trait]
impl TodosRepo for InMemoryTodosRepo {
    async fn find_all(&self) -> Result<Vec<Todo>, RepoError> {
        Ok(self.rows())
    }

    async fn save(&self, todo: &Todo) -> Result<(), RepoError> {
        let mut rows = rw_write(&self.rows, SOURCE, "save");
        if rows.iter().any(|row| row.id == todo.id) {
            return Err(RepoError::Duplicate {
                constraint: "todos_pkey".to_string(),
            });
        }
        rows.push(todo.clone());
        Ok(())
    }

    async fn update_status(&self, params: &UpdateTodoStatus) -> Result<(), RepoError> {
        let mut rows = rw_write(&self.rows, SOURCE, "update_status");
        let row = rows
            .iter_mut()
            .find(|row| row.id == params.id)
            .ok_or(RepoError::NotFound)?;
        row.status = params.status.clone();
        Ok(())
    }

    async fn delete(&self, params: &DeleteTodo) -> Result<(), RepoError> {
        let mut rows = rw_write(&self.rows, SOURCE, "delete");
        let before = rows.len();
        rows.retain(|row| row.id != params.id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str) -> Todo {
        Todo {
            id: id.into(),
            topic: "Buy milk".into(),
            description: "2%".into(),
            status: "Pending".into(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let repo = InMemoryTodosRepo::new();
        repo.save(&todo("b")).await.unwrap();
        repo.save(&todo("a")).await.unwrap();

        let ids: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let repo = InMemoryTodosRepo::with_rows(vec![todo("a")]);

        let err = repo.save(&todo("a")).await.expect_err("duplicate");
        assert!(matches!(err, RepoError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = InMemoryTodosRepo::with_rows(vec![todo("a")]);

        repo.update_status(&UpdateTodoStatus {
            id: "a".into(),
            status: "Done".into(),
        })
        .await
        .unwrap();
        assert_eq!(repo.rows()[0].status, "Done");

        let missing = UpdateTodoStatus {
            id: "zzz".into(),
            status: "Done".into(),
        };
        assert!(matches!(
            repo.update_status(&missing).await,
            Err(RepoError::NotFound)
        ));

        repo.delete(&DeleteTodo { id: "a".into() }).await.unwrap();
        assert!(repo.rows().is_empty());
        assert!(matches!(
            repo.delete(&DeleteTodo { id: "a".into() }).await,
            Err(RepoError::NotFound)
        ));
    }
}
