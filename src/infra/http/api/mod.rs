pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::ApiState;

use axum::{Router, routing::get};

pub fn build_api_router(state: ApiState) -> Router {
    let todo_routes = get(handlers::list_todos)
        .post(handlers::create_todo)
        .put(handlers::update_todo_status)
        .delete(handlers::delete_todo);

    // Both spellings are served; existing clients use the trailing slash.
    Router::new()
        .route("/api/v1/todo", todo_routes.clone())
        .route("/api/v1/todo/", todo_routes)
        .with_state(state)
}
