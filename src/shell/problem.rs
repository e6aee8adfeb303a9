use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::feedback::core::store::StoreError;
use crate::modules::feedback::use_cases::errors::ApplicationError;
use crate::modules::feedback::use_cases::submit_feedback::command::BackdateError;

/// Error reply shared by the HTTP handlers: a status and a message for the user.
#[derive(Debug)]
pub struct ApiProblem {
    status: StatusCode,
    detail: String,
}

#[derive(Serialize)]
struct ProblemBody {
    error: String,
}

impl ApiProblem {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn admin_required() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Admin mode required")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ApplicationError> for ApiProblem {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(reason) => {
                Self::new(StatusCode::BAD_REQUEST, reason.to_string())
            }
            ApplicationError::InvalidDeleteKey => {
                Self::new(StatusCode::FORBIDDEN, error.to_string())
            }
            ApplicationError::Store(StoreError::OutOfRange { .. }) => {
                Self::new(StatusCode::NOT_FOUND, error.to_string())
            }
            ApplicationError::Store(StoreError::Persistence(inner)) => {
                tracing::error!(error = %inner, "feedback store write failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
            }
        }
    }
}

impl From<BackdateError> for ApiProblem {
    fn from(error: BackdateError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
    }
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        (self.status, Json(ProblemBody { error: self.detail })).into_response()
    }
}
