use serde::{Deserialize, Serialize};

use crate::domain::todos::{DeleteTodo, NewTodo, Todo, UpdateTodoStatus};

// Missing fields deserialize as empty strings so they surface as validation errors.

#[derive(Debug, Deserialize, Serialize)]
pub struct TodoCreateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl From<TodoCreateRequest> for NewTodo {
    fn from(request: TodoCreateRequest) -> Self {
        Self {
            topic: request.topic,
            description: request.description,
            status: request.status,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TodoStatusRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
}

impl From<TodoStatusRequest> for UpdateTodoStatus {
    fn from(request: TodoStatusRequest) -> Self {
        Self {
            id: request.id,
            status: request.status,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TodoDeleteRequest {
    #[serde(default)]
    pub id: String,
}

impl From<TodoDeleteRequest> for DeleteTodo {
    fn from(request: TodoDeleteRequest) -> Self {
        Self { id: request.id }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub message: Vec<Todo>,
    #[serde(rename = "X-Request-ID")]
    pub request_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoCreatedResponse {
    pub message: String,
    #[serde(rename = "dataAdded")]
    pub data_added: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
