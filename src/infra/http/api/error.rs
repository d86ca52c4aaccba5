use crate::application::error::ErrorReport;
use crate::application::repos::RepoError;
use crate::application::todos::TodoServiceError;
use crate::domain::error::DomainError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

pub mod codes {
    pub const BAD_REQUEST: &str = "bad_request";
    pub const VALIDATION: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const DUPLICATE: &str = "duplicate";
    pub const INTERNAL: &str = "internal_error";
}

#[derive(Debug, Serialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    hint: Option<String>,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: &'static str,
        hint: Option<String>,
    ) -> Self {
        Self {
            status,
            code,
            message,
            hint,
            detail: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Diagnostic text for the logs; never serialized.
    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn invalid_body(rejection: JsonRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            codes::BAD_REQUEST,
            "Invalid request body.",
            None,
        )
        .with_detail(rejection.body_text())
    }

    pub fn validation(err: DomainError) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            codes::VALIDATION,
            "Validation failed.",
            Some(format!(
                "Validation error on field: {} - required",
                err.field()
            )),
        )
    }

    /// Failure of the list route, which reports its own message for server errors.
    pub fn fetch_failed(err: TodoServiceError) -> Self {
        let mut api = Self::from(err);
        if api.status == StatusCode::INTERNAL_SERVER_ERROR {
            api.message = "Failed to fetch todos";
        }
        api
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::INTERNAL,
            "Internal server error.",
            None,
        )
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        let base = match &err {
            TodoServiceError::Repo(RepoError::NotFound) => Self::new(
                StatusCode::NOT_FOUND,
                codes::NOT_FOUND,
                "Todo not found.",
                None,
            ),
            TodoServiceError::Repo(RepoError::Duplicate { .. }) => Self::new(
                StatusCode::CONFLICT,
                codes::DUPLICATE,
                "Todo already exists.",
                None,
            ),
            _ => Self::internal(),
        };
        base.with_detail(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self
            .detail
            .or_else(|| self.hint.clone())
            .unwrap_or_else(|| self.message.to_string());
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message.to_string(),
                hint: self.hint,
            },
        };
        let mut response = (self.status, Json(body)).into_response();
        ErrorReport::from_message(
            "infra::http::api",
            self.status,
            format!("{}: {detail}", self.code),
        )
        .attach(&mut response);
        response
    }
}
