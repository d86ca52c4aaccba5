//! Todo handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use tracing::info;

use crate::domain::todos::{DeleteTodo, NewTodo, UpdateTodoStatus};
use crate::infra::http::middleware::RequestContext;

use super::error::ApiError;
use super::models::*;
use super::state::ApiState;

const TARGET: &str = "todo_service::http::todo";

pub async fn list_todos(
    State(state): State<ApiState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = state
        .todos
        .find_all()
        .await
        .map_err(ApiError::fetch_failed)?;

    info!(
        target: TARGET,
        request_id = %ctx.request_id,
        count = todos.len(),
        "returning todos"
    );
    Ok(Json(TodoListResponse {
        message: todos,
        request_id: ctx.request_id,
    }))
}

pub async fn create_todo(
    State(state): State<ApiState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<TodoCreateRequest>, JsonRejection>,
) -> Result<Json<TodoCreatedResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::invalid_body)?;
    let input = NewTodo::from(payload);
    input.validate().map_err(ApiError::validation)?;

    let todo = input.into_todo();
    state.todos.create(todo.clone()).await?;

    info!(
        target: TARGET,
        request_id = %ctx.request_id,
        id = %todo.id,
        "todo created"
    );
    Ok(Json(TodoCreatedResponse {
        message: "insert ok".to_string(),
        data_added: todo,
    }))
}

pub async fn update_todo_status(
    State(state): State<ApiState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<TodoStatusRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::invalid_body)?;
    let input = UpdateTodoStatus::from(payload);
    input.validate().map_err(ApiError::validation)?;

    let id = input.id.clone();
    state.todos.update_status(input).await?;

    info!(target: TARGET, request_id = %ctx.request_id, id = %id, "todo updated");
    Ok(Json(MessageResponse::new("update ok")))
}

pub async fn delete_todo(
    State(state): State<ApiState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<TodoDeleteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::invalid_body)?;
    let input = DeleteTodo::from(payload);
    input.validate().map_err(ApiError::validation)?;

    let id = input.id.clone();
    state.todos.delete(input).await?;

    info!(target: TARGET, request_id = %ctx.request_id, id = %id, "todo deleted");
    Ok(Json(MessageResponse::new("deleted ok")))
}
