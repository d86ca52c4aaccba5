use async_trait::async_trait;

use crate::{
    application::repos::{RepoError, TodosRepo},
    domain::todos::{DeleteTodo, Todo, UpdateTodoStatus},
};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: String,
    topic: String,
    description: String,
    status: String,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            topic: row.topic,
            description: row.description,
            status: row.status,
        }
    }
}

#[async_trait]
impl TodosRepo for PostgresRepositories {
    async fn find_all(&self) -> Result<Vec<Todo>, RepoError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, topic, description, status
            FROM todos
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn save(&self, todo: &Todo) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, topic, description, status)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&todo.id)
        .bind(&todo.topic)
        .bind(&todo.description)
        .bind(&todo.status)
        .execute(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update_status(&self, params: &UpdateTodoStatus) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(&params.id)
        .bind(&params.status)
        .execute(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, params: &DeleteTodo) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(&params.id)
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
