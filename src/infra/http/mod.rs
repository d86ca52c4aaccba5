pub mod api;
pub mod middleware;

pub use api::{ApiState, build_api_router};

use crate::application::error::ErrorReport;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware as axum_middleware, routing::get};
use sqlx::Error as SqlxError;

/// Full application router: todo API and health check behind the shared request middleware.
pub fn build_router(state: ApiState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health))
        .with_state(state.clone());

    build_api_router(state)
        .merge(health_routes)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(axum_middleware::from_fn(middleware::set_request_context))
        .layer(axum_middleware::from_fn(middleware::cors))
}

async fn health(State(state): State<ApiState>) -> Response {
    match state.db.as_ref() {
        Some(db) => db_health_response(db.health_check().await),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

fn db_health_response(result: Result<(), SqlxError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            let mut response = StatusCode::SERVICE_UNAVAILABLE.into_response();
            ErrorReport::from_error(
                "infra::http::db_health",
                StatusCode::SERVICE_UNAVAILABLE,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_health_check_reports_service_unavailable() {
        let response = db_health_response(Err(SqlxError::PoolTimedOut));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.extensions().get::<ErrorReport>().is_some());

        let response = db_health_response(Ok(()));
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
